/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, registry, console, etc.).
pub mod dependency_source;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod registry_client;

pub use dependency_source::{DependencyQuery, DependencySource};
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use registry_client::RegistryClient;
