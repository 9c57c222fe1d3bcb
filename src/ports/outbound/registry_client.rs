use crate::shared::Result;

/// RegistryClient port for querying a package registry
///
/// One call answers for one package; crawling the transitive closure is the
/// caller's job.
pub trait RegistryClient {
    /// Base URL of the registry API, used in messages
    fn registry_url(&self) -> &str;

    /// Returns the newest published version of a package
    ///
    /// # Errors
    /// Returns an error if the request fails, the registry answers with a
    /// non-success status, or the body cannot be parsed
    fn latest_version(&self, package_name: &str) -> Result<String>;

    /// Returns the names of a package version's runtime ("normal") dependencies
    ///
    /// Development and build dependencies are not included.
    ///
    /// # Errors
    /// Same conditions as [`RegistryClient::latest_version`]
    fn direct_dependencies(&self, package_name: &str, version: &str) -> Result<Vec<String>>;
}
