use crate::resolution::domain::PackageName;
use crate::resolution::policies::TraversalPolicy;
use crate::shared::error::DepOrderError;
use crate::shared::Result;

/// Default depth bound when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// ResolveRequest - input of the load-order use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Package the graph is rooted at
    pub root: PackageName,
    /// Version of the root package; `None` lets the source pick the newest
    pub version: Option<String>,
    /// Depth bound and filter substring
    pub policy: TraversalPolicy,
    /// Reference order to compare the computed order against
    pub expected_order: Option<Vec<String>>,
}

impl ResolveRequest {
    pub fn new(
        root: PackageName,
        version: Option<String>,
        policy: TraversalPolicy,
        expected_order: Option<Vec<String>>,
    ) -> Self {
        Self {
            root,
            version,
            policy,
            expected_order,
        }
    }

    pub fn builder() -> ResolveRequestBuilder {
        ResolveRequestBuilder::default()
    }
}

/// Builder for [`ResolveRequest`] with validation at `build()`
#[derive(Debug, Default)]
pub struct ResolveRequestBuilder {
    root: Option<String>,
    version: Option<String>,
    max_depth: Option<usize>,
    filter_substring: String,
    expected_order: Option<Vec<String>>,
}

impl ResolveRequestBuilder {
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn version(mut self, version: Option<String>) -> Self {
        self.version = version.filter(|v| !v.trim().is_empty());
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn filter_substring(mut self, filter_substring: impl Into<String>) -> Self {
        self.filter_substring = filter_substring.into();
        self
    }

    pub fn expected_order(mut self, expected_order: Option<Vec<String>>) -> Self {
        self.expected_order = expected_order;
        self
    }

    /// Validates and builds the request
    ///
    /// # Errors
    /// Returns `DepOrderError::Validation` if no root was set or it is invalid
    pub fn build(self) -> Result<ResolveRequest> {
        let root = self.root.ok_or_else(|| DepOrderError::Validation {
            message: "root package name is required".to_string(),
        })?;
        let root = PackageName::new(root).map_err(|e| DepOrderError::Validation {
            message: e.to_string(),
        })?;

        Ok(ResolveRequest::new(
            root,
            self.version,
            TraversalPolicy::new(
                self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
                self.filter_substring,
            ),
            self.expected_order,
        ))
    }
}
