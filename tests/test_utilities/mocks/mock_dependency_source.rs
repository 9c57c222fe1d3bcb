use deporder::prelude::*;

/// Mock DependencySource serving a fixed dependency map
pub struct MockDependencySource {
    pub edges: DependencyMap,
    pub should_fail: bool,
}

impl MockDependencySource {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        Self {
            edges: entries
                .iter()
                .map(|(name, deps)| {
                    (
                        name.to_string(),
                        deps.iter().map(|d| d.to_string()).collect(),
                    )
                })
                .collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            edges: DependencyMap::new(),
            should_fail: true,
        }
    }
}

impl DependencySource for MockDependencySource {
    fn load_dependencies(
        &self,
        _query: &DependencyQuery,
        _reporter: &dyn ProgressReporter,
    ) -> Result<DependencyMap> {
        if self.should_fail {
            anyhow::bail!("Mock dependency source failure");
        }
        Ok(self.edges.clone())
    }

    fn describe(&self) -> String {
        "mock dependency source".to_string()
    }
}
