use crate::resolution::domain::{DependencyGraph, LoadOrder, OrderComparison, PackageName};
use crate::resolution::policies::TraversalPolicy;

/// ResolveResponse - output of the load-order use case
///
/// Formatters render this as-is.
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    pub root: PackageName,
    /// Bounds the graph was built under
    pub policy: TraversalPolicy,
    pub graph: DependencyGraph,
    pub load_order: LoadOrder,
    /// Present only when a reference order was supplied
    pub comparison: Option<OrderComparison>,
}

impl ResolveResponse {
    pub fn new(
        root: PackageName,
        policy: TraversalPolicy,
        graph: DependencyGraph,
        load_order: LoadOrder,
        comparison: Option<OrderComparison>,
    ) -> Self {
        Self {
            root,
            policy,
            graph,
            load_order,
            comparison,
        }
    }

    /// True when a reference order was supplied and differs
    pub fn has_order_mismatch(&self) -> bool {
        matches!(self.comparison, Some(OrderComparison::Mismatch { .. }))
    }
}
