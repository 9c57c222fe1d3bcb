/// Pruning rules shared by graph construction and registry crawling
///
/// A node is admitted when it sits within `max_depth` hops of the root
/// (the root is depth 0) and does not contain the filter substring.
/// An empty filter excludes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalPolicy {
    max_depth: usize,
    filter_substring: String,
}

impl TraversalPolicy {
    pub fn new(max_depth: usize, filter_substring: impl Into<String>) -> Self {
        Self {
            max_depth,
            filter_substring: filter_substring.into(),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn filter_substring(&self) -> &str {
        &self.filter_substring
    }

    pub fn is_filtered(&self, name: &str) -> bool {
        !self.filter_substring.is_empty() && name.contains(&self.filter_substring)
    }

    pub fn admits(&self, name: &str, depth: usize) -> bool {
        depth <= self.max_depth && !self.is_filtered(name)
    }
}
