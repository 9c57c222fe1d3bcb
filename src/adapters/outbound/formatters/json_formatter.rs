use crate::application::dto::ResolveResponse;
use crate::ports::outbound::ReportFormatter;
use crate::resolution::domain::OrderComparison;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a str,
    max_depth: usize,
    filter_substring: &'a str,
    graph: BTreeMap<&'a str, &'a [String]>,
    load_order: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<JsonComparison<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum JsonComparison<'a> {
    Match,
    Mismatch { expected: &'a [String] },
}

impl<'a> From<&'a OrderComparison> for JsonComparison<'a> {
    fn from(comparison: &'a OrderComparison) -> Self {
        match comparison {
            OrderComparison::Match => JsonComparison::Match,
            OrderComparison::Mismatch { expected } => JsonComparison::Mismatch { expected },
        }
    }
}

/// JsonFormatter adapter producing a machine-readable report
///
/// Graph values keep the declared dependency order.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &ResolveResponse) -> Result<String> {
        let report = JsonReport {
            root: response.root.as_str(),
            max_depth: response.policy.max_depth(),
            filter_substring: response.policy.filter_substring(),
            graph: response.graph.iter().collect(),
            load_order: response.load_order.as_slice(),
            comparison: response.comparison.as_ref().map(JsonComparison::from),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
