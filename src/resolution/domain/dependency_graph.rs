use std::collections::{BTreeMap, HashMap};

/// Direct dependencies per package, as declared by a dependency source
pub type DependencyMap = HashMap<String, Vec<String>>;

/// DependencyGraph aggregate: the nodes that survived traversal
///
/// Each value is the source's declared list for that key, unmodified
/// (duplicates and all). Keys iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with its declared dependencies, replacing any previous entry
    pub fn insert(&mut self, name: String, dependencies: Vec<String>) {
        self.nodes.insert(name, dependencies);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Declared dependencies of `name`, or `None` if it is not a node
    pub fn dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.nodes.get(name).map(Vec::as_slice)
    }

    /// Iterates `(name, dependencies)` in sorted key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.nodes
            .iter()
            .map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
