//! deporder - dependency graph and load-order resolver
//!
//! This library builds a depth- and filter-bounded dependency graph for a root
//! package and derives a load order in which every package follows all of its
//! dependencies. Edges come from a local adjacency-list file or from a
//! crates.io-compatible registry.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resolution`): graph construction and load ordering, no I/O
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deporder::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let source = FileSystemReader::new(PathBuf::from("deps.txt"));
//! let use_case = ResolveLoadOrderUseCase::new(source, StderrProgressReporter::new());
//!
//! let request = ResolveRequest::builder().root("app").max_depth(5).build()?;
//! let response = use_case.execute(request)?;
//!
//! let output = TextFormatter::new().format(&response)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        parse_adjacency_list, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{
        CratesIoClient, RegistryDependencySource, DEFAULT_REGISTRY_URL,
    };
    pub use crate::application::dto::{OutputFormat, ResolveRequest, ResolveResponse};
    pub use crate::application::use_cases::ResolveLoadOrderUseCase;
    pub use crate::ports::outbound::{
        DependencyQuery, DependencySource, OutputPresenter, ProgressReporter, RegistryClient,
        ReportFormatter,
    };
    pub use crate::resolution::domain::{
        DependencyGraph, DependencyMap, LoadOrder, OrderComparison, PackageName,
    };
    pub use crate::resolution::policies::TraversalPolicy;
    pub use crate::resolution::services::{GraphBuilder, LoadOrderResolver};
    pub use crate::shared::error::{DepOrderError, ExitCode};
    pub use crate::shared::Result;
}
