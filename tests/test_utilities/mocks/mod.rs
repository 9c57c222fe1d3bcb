/// Mock implementations for testing
mod mock_dependency_source;
mod mock_progress_reporter;
mod mock_registry_client;

pub use mock_dependency_source::MockDependencySource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_registry_client::MockRegistryClient;
