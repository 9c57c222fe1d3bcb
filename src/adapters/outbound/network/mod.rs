/// Network adapters for registry access
mod crates_io_client;
mod registry_source;

pub use crates_io_client::{CratesIoClient, DEFAULT_REGISTRY_URL};
pub use registry_source::RegistryDependencySource;
