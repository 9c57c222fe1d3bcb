use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Build a package's bounded dependency graph and compute its load order
#[derive(Parser, Debug)]
#[command(name = "deporder")]
#[command(version)]
#[command(about = "Build a package's bounded dependency graph and compute its load order", long_about = None)]
pub struct Args {
    /// Config file path (defaults to ./deporder.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root package name
    #[arg(short, long, value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Registry base URL, or the dependency file path with --test-mode
    #[arg(short, long, value_name = "REPOSITORY")]
    pub repository: Option<String>,

    /// Read dependencies from a local 'package: dep, dep' file
    #[arg(long)]
    pub test_mode: bool,

    /// Version of the root package (defaults to the newest published one)
    #[arg(long = "package-version", value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Maximum traversal depth; the root is depth 0
    #[arg(short = 'd', long, value_name = "MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// Skip every package whose name contains this substring
    #[arg(long, value_name = "SUBSTR")]
    pub filter: Option<String>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Expected load order to compare against, comma-separated
    #[arg(long, value_name = "a,b,c", value_delimiter = ',')]
    pub expected: Option<Vec<String>>,
}

impl Args {
    /// Parses arguments, returning clap's error instead of exiting
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("deporder").chain(argv.iter().copied()))
    }

    #[test]
    fn test_parse_no_arguments() {
        let args = parse(&[]).unwrap();
        assert!(args.package.is_none());
        assert!(!args.test_mode);
        assert!(args.format.is_none());
        assert!(args.expected.is_none());
    }

    #[test]
    fn test_parse_all_arguments() {
        let args = parse(&[
            "--config",
            "ci.yml",
            "-p",
            "app",
            "-r",
            "deps.txt",
            "--test-mode",
            "--package-version",
            "1.2.3",
            "-d",
            "4",
            "--filter",
            "test",
            "-f",
            "json",
            "-o",
            "order.json",
            "--expected",
            "lib,app",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("ci.yml")));
        assert_eq!(args.package.as_deref(), Some("app"));
        assert_eq!(args.repository.as_deref(), Some("deps.txt"));
        assert!(args.test_mode);
        assert_eq!(args.package_version.as_deref(), Some("1.2.3"));
        assert_eq!(args.max_depth, Some(4));
        assert_eq!(args.filter.as_deref(), Some("test"));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.output, Some(PathBuf::from("order.json")));
        assert_eq!(
            args.expected,
            Some(vec!["lib".to_string(), "app".to_string()])
        );
    }

    #[test]
    fn test_parse_format_alias() {
        let args = parse(&["-f", "TXT"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Text));
    }

    #[test]
    fn test_parse_invalid_format() {
        let err = parse(&["-f", "yaml"]).unwrap_err();
        assert!(err.to_string().contains("Invalid format: yaml"));
    }

    #[test]
    fn test_parse_negative_depth_rejected() {
        assert!(parse(&["-d", "-1"]).is_err());
    }

    #[test]
    fn test_parse_non_integer_depth_rejected() {
        assert!(parse(&["-d", "deep"]).is_err());
    }
}
