mod traversal_policy;

pub use traversal_policy::TraversalPolicy;
