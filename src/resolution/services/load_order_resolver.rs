use crate::resolution::domain::{DependencyGraph, LoadOrder, OrderComparison};
use std::collections::HashSet;

/// A pending visit on the traversal stack
struct Frame<'a> {
    node: &'a str,
    /// Dependencies already pushed; the next pop emits the node
    children_queued: bool,
}

/// LoadOrderResolver service computing a depth-first postorder
///
/// Emits each package after all of its dependencies. Runs on an explicit
/// stack so deep chains cannot overflow the thread stack, yet produces the
/// exact sequence of the recursive definition: dependencies are visited in
/// declared order and a package already visited is skipped.
pub struct LoadOrderResolver;

impl LoadOrderResolver {
    /// Computes the load order of `graph` starting at `root`
    ///
    /// Dependencies that are not nodes of `graph` (pruned by depth or filter)
    /// are still emitted, as leaves. A root absent from `graph` yields `[root]`.
    pub fn order(graph: &DependencyGraph, root: &str) -> LoadOrder {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut output = Vec::new();
        let mut stack = vec![Frame {
            node: root,
            children_queued: false,
        }];

        while let Some(frame) = stack.pop() {
            if frame.children_queued {
                output.push(frame.node.to_string());
                continue;
            }
            if !visited.insert(frame.node) {
                continue;
            }

            stack.push(Frame {
                node: frame.node,
                children_queued: true,
            });
            // Reversed so the first declared dependency is popped first
            let dependencies = graph.dependencies_of(frame.node).unwrap_or_default();
            for dep in dependencies.iter().rev() {
                stack.push(Frame {
                    node: dep.as_str(),
                    children_queued: false,
                });
            }
        }

        LoadOrder::new(output)
    }

    /// Compares a computed order with a reference order
    pub fn validate(order: &LoadOrder, expected: &[String]) -> OrderComparison {
        order.compare(expected)
    }
}
