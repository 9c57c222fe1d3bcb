use crate::ports::outbound::{DependencyQuery, DependencySource, ProgressReporter, RegistryClient};
use crate::resolution::domain::DependencyMap;
use crate::shared::Result;
use std::collections::{HashSet, VecDeque};

/// RegistryDependencySource adapter crawling a registry breadth-first
///
/// Fetches direct dependencies one package at a time, starting at the query
/// root and pruning with the query's traversal policy so that no request is
/// made for a package the graph builder would drop.
///
/// A failed lookup is not fatal: the package gets an empty dependency list
/// and a warning is reported. The resulting map cannot tell such a package
/// apart from a genuine leaf.
pub struct RegistryDependencySource<C: RegistryClient> {
    client: C,
}

impl<C: RegistryClient> RegistryDependencySource<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Direct dependencies of one package; failures degrade to an empty list
    ///
    /// The root is looked up at the requested version, every other package
    /// at its newest version.
    fn fetch_or_empty(
        &self,
        package_name: &str,
        version: Option<&str>,
        reporter: &dyn ProgressReporter,
    ) -> Vec<String> {
        let version = match version {
            Some(version) => version.to_string(),
            None => match self.client.latest_version(package_name) {
                Ok(version) => version,
                Err(e) => {
                    reporter.report_error(&format!(
                        "⚠️  Warning: Could not resolve a version for '{}', treating it as having no dependencies: {}",
                        package_name, e
                    ));
                    return Vec::new();
                }
            },
        };

        match self.client.direct_dependencies(package_name, &version) {
            Ok(dependencies) => dependencies,
            Err(e) => {
                reporter.report_error(&format!(
                    "⚠️  Warning: Could not fetch dependencies of '{} {}', treating it as having no dependencies: {}",
                    package_name, version, e
                ));
                Vec::new()
            }
        }
    }
}

impl<C: RegistryClient> DependencySource for RegistryDependencySource<C> {
    fn load_dependencies(
        &self,
        query: &DependencyQuery,
        reporter: &dyn ProgressReporter,
    ) -> Result<DependencyMap> {
        let policy = &query.policy;
        let root = query.root.as_str();
        let mut dependencies = DependencyMap::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<(String, usize)> = VecDeque::new();

        reporter.report(&format!(
            "🌐 Querying {} for '{}'",
            self.client.registry_url(),
            root
        ));

        // The root is always fetched so that it is a key of the map
        visited.insert(root.to_string());
        queue.push_back((root.to_string(), 0));

        while let Some((package_name, depth)) = queue.pop_front() {
            reporter.report_progress(
                dependencies.len(),
                dependencies.len() + queue.len() + 1,
                Some(&package_name),
            );

            let version = if depth == 0 {
                query.version.as_deref()
            } else {
                None
            };
            let direct = self.fetch_or_empty(&package_name, version, reporter);

            if policy.admits(&package_name, depth) {
                for dep in &direct {
                    if policy.admits(dep, depth + 1) && visited.insert(dep.clone()) {
                        queue.push_back((dep.clone(), depth + 1));
                    }
                }
            }

            dependencies.insert(package_name, direct);
        }

        reporter.report_completion(&format!(
            "✅ Fetched dependencies for {} package(s)",
            dependencies.len()
        ));

        Ok(dependencies)
    }

    fn describe(&self) -> String {
        self.client.registry_url().to_string()
    }
}
