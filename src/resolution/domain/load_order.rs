/// Linearized dependency order: every package follows the packages it depends on
///
/// Holds no duplicates. May contain names that are not nodes of the graph it
/// was computed from (dependencies pruned by depth or filter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOrder(Vec<String>);

impl LoadOrder {
    pub fn new(packages: Vec<String>) -> Self {
        Self(packages)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|p| p == name)
    }

    /// Elementwise comparison against a reference order
    pub fn compare(&self, expected: &[String]) -> OrderComparison {
        if self.0.as_slice() == expected {
            OrderComparison::Match
        } else {
            OrderComparison::Mismatch {
                expected: expected.to_vec(),
            }
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Outcome of comparing a computed load order with a reference one.
///
/// A mismatch is advisory: real package managers also order by version and
/// feature selection, which this resolver ignores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderComparison {
    Match,
    Mismatch { expected: Vec<String> },
}

impl OrderComparison {
    pub fn is_match(&self) -> bool {
        matches!(self, OrderComparison::Match)
    }
}
