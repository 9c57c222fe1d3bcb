use crate::ports::outbound::ProgressReporter;
use crate::resolution::domain::{DependencyMap, PackageName};
use crate::resolution::policies::TraversalPolicy;
use crate::shared::Result;

/// What a dependency source is asked to supply
///
/// Sources that must fetch edges one package at a time (a registry) use the
/// policy to avoid fetching nodes the graph builder would discard. Sources
/// that read everything at once (a local file) can ignore it.
#[derive(Debug, Clone)]
pub struct DependencyQuery {
    pub root: PackageName,
    /// Version of the root package; `None` means the newest published one
    pub version: Option<String>,
    pub policy: TraversalPolicy,
}

impl DependencyQuery {
    pub fn new(root: PackageName, version: Option<String>, policy: TraversalPolicy) -> Self {
        Self {
            root,
            version,
            policy,
        }
    }
}

/// DependencySource port supplying direct-dependency edges
///
/// All I/O of a run happens behind this port, strictly before the graph
/// builder runs.
pub trait DependencySource {
    /// Loads the direct dependencies needed to resolve `query`
    ///
    /// # Arguments
    /// * `query` - Root package, version and traversal bounds
    /// * `reporter` - Receives progress and recoverable warnings
    ///
    /// # Returns
    /// Map of package name to its declared direct dependencies
    ///
    /// # Errors
    /// Returns an error if the source as a whole is unusable (missing or
    /// malformed file). Per-package lookup failures that the source can
    /// recover from are reported as warnings instead.
    fn load_dependencies(
        &self,
        query: &DependencyQuery,
        reporter: &dyn ProgressReporter,
    ) -> Result<DependencyMap>;

    /// Human-readable name of the source, used in messages
    fn describe(&self) -> String;
}
