use crate::resolution::domain::{DependencyGraph, DependencyMap};
use crate::resolution::policies::TraversalPolicy;
use std::collections::{HashSet, VecDeque};

/// GraphBuilder service for bounded breadth-first graph construction
///
/// Decides only which nodes to include. An included node's value is the
/// source's declared list verbatim, or empty when the source has no entry
/// for it. Never fails: a root absent from the map yields a one-node graph.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the dependency graph reachable from `root` under `policy`
    ///
    /// # Arguments
    /// * `root` - Package the traversal starts from (depth 0)
    /// * `dependency_map` - Direct dependencies per package
    /// * `policy` - Depth bound and filter substring
    ///
    /// # Returns
    /// A DependencyGraph with one entry per admitted, reachable package
    pub fn build(
        root: &str,
        dependency_map: &DependencyMap,
        policy: &TraversalPolicy,
    ) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
        queue.push_back((root, 0));

        while let Some((node, depth)) = queue.pop_front() {
            // Filtered nodes are never expanded, the root included
            if !policy.admits(node, depth) {
                continue;
            }
            if !visited.insert(node) {
                continue;
            }

            let dependencies = dependency_map.get(node).cloned().unwrap_or_default();
            for dep in dependency_map.get(node).into_iter().flatten() {
                queue.push_back((dep.as_str(), depth + 1));
            }
            graph.insert(node.to_string(), dependencies);
        }

        graph
    }
}
