pub mod dependency_graph;
pub mod load_order;
pub mod package;

pub use dependency_graph::{DependencyGraph, DependencyMap};
pub use load_order::{LoadOrder, OrderComparison};
pub use package::PackageName;
