mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod resolution;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::FileSystemReader;
use adapters::outbound::network::{CratesIoClient, RegistryDependencySource};
use application::dto::{ResolveRequest, ResolveResponse};
use application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use application::use_cases::ResolveLoadOrderUseCase;
use cli::Args;
use config::Settings;
use ports::outbound::DependencySource;
use shared::error::ExitCode;
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        // --help and --version are reported as errors by clap but exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(ExitCode::InvalidArguments.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Merge CLI flags, config file and defaults
    let config = config::load_config(args.config.as_deref(), Path::new("."))?;
    let settings = Settings::resolve(&args, config)?;

    let request = build_request(&settings)?;

    // Create adapters (Dependency Injection) and execute the use case
    let response = if settings.test_mode {
        let source = FileSystemReader::new(PathBuf::from(&settings.repository));
        resolve(source, request)?
    } else {
        let client = CratesIoClient::new(&settings.repository)?;
        resolve(RegistryDependencySource::new(client), request)?
    };

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response)?;

    // Present output
    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    // An order mismatch is advisory; the run still succeeds
    Ok(())
}

fn build_request(settings: &Settings) -> Result<ResolveRequest> {
    ResolveRequest::builder()
        .root(settings.package_name.clone())
        .version(settings.package_version.clone())
        .max_depth(settings.max_depth)
        .filter_substring(settings.filter_substring.clone())
        .expected_order(settings.expected_order.clone())
        .build()
}

fn resolve<DS: DependencySource>(source: DS, request: ResolveRequest) -> Result<ResolveResponse> {
    let use_case = ResolveLoadOrderUseCase::new(source, StderrProgressReporter::new());
    use_case.execute(request)
}
