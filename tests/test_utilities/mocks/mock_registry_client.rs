use deporder::prelude::*;
use std::collections::{HashMap, HashSet};

/// Mock RegistryClient with per-package dependencies and injectable failures
pub struct MockRegistryClient {
    latest: HashMap<String, String>,
    dependencies: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
}

impl MockRegistryClient {
    pub fn new() -> Self {
        Self {
            latest: HashMap::new(),
            dependencies: HashMap::new(),
            failing: HashSet::new(),
        }
    }

    /// Publishes `name@version` with the given normal dependencies
    pub fn with_crate(mut self, name: &str, version: &str, deps: &[&str]) -> Self {
        self.latest.insert(name.to_string(), version.to_string());
        self.dependencies.insert(
            format!("{}@{}", name, version),
            deps.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }
}

impl Default for MockRegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryClient for MockRegistryClient {
    fn registry_url(&self) -> &str {
        "mock://registry"
    }

    fn latest_version(&self, name: &str) -> Result<String> {
        if self.failing.contains(name) {
            anyhow::bail!("Mock registry failure for {}", name);
        }
        self.latest
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Registry returned status code 404 Not Found"))
    }

    fn direct_dependencies(&self, name: &str, version: &str) -> Result<Vec<String>> {
        let key = format!("{}@{}", name, version);
        if self.failing.contains(name) {
            anyhow::bail!("Mock registry failure for {}", name);
        }
        self.dependencies
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Registry returned status code 404 Not Found"))
    }
}
