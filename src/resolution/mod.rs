/// Dependency resolution core: graph construction and load ordering
///
/// Pure logic with no I/O. Everything here operates on an already loaded
/// `DependencyMap` and owns its traversal state per call.
pub mod domain;
pub mod policies;
pub mod services;
