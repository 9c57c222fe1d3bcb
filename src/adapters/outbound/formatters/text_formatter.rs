use crate::application::dto::ResolveResponse;
use crate::ports::outbound::ReportFormatter;
use crate::resolution::domain::OrderComparison;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter producing the console report
///
/// Layout:
/// - the graph, one `name: [dep, dep]` line per node, keys and lists sorted
/// - the load order as a numbered list
/// - a match/mismatch line when a reference order was supplied
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_graph(out: &mut String, response: &ResolveResponse) {
        let policy = &response.policy;
        let _ = write!(
            out,
            "Dependency graph for {} (max depth: {}",
            response.root,
            policy.max_depth()
        );
        if !policy.filter_substring().is_empty() {
            let _ = write!(out, ", filter: \"{}\"", policy.filter_substring());
        }
        out.push_str("):\n");

        if response.graph.is_empty() {
            out.push_str("  (no packages)\n");
        }
        for (name, dependencies) in response.graph.iter() {
            let mut sorted: Vec<&str> = dependencies.iter().map(String::as_str).collect();
            sorted.sort_unstable();
            let _ = writeln!(out, "{}: [{}]", name, sorted.join(", "));
        }
    }

    fn write_load_order(out: &mut String, response: &ResolveResponse) {
        out.push_str("\nLoad order:\n");
        let width = response.load_order.len().to_string().len();
        for (index, name) in response.load_order.iter().enumerate() {
            let _ = writeln!(out, "  {:>width$}. {}", index + 1, name, width = width);
        }
    }

    fn write_comparison(out: &mut String, comparison: &OrderComparison) {
        out.push('\n');
        match comparison {
            OrderComparison::Match => out.push_str("✅ Load order matches expected order\n"),
            OrderComparison::Mismatch { expected } => {
                out.push_str("⚠️  Load order differs from expected order\n");
                let _ = writeln!(out, "   Expected: [{}]", expected.join(", "));
                out.push_str(
                    "   Note: package managers also order by version and feature selection, \
                     which this resolver ignores.\n",
                );
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &ResolveResponse) -> Result<String> {
        let mut out = String::new();
        Self::write_graph(&mut out, response);
        Self::write_load_order(&mut out, response);
        if let Some(comparison) = &response.comparison {
            Self::write_comparison(&mut out, comparison);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::domain::{DependencyGraph, LoadOrder, PackageName};
    use crate::resolution::policies::TraversalPolicy;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn response(comparison: Option<OrderComparison>, filter: &str) -> ResolveResponse {
        let graph: DependencyGraph = vec![
            ("A".to_string(), names(&["C", "B"])),
            ("B".to_string(), names(&["D"])),
            ("C".to_string(), names(&["D"])),
            ("D".to_string(), vec![]),
        ]
        .into_iter()
        .collect();

        ResolveResponse::new(
            PackageName::new("A".to_string()).unwrap(),
            TraversalPolicy::new(3, filter),
            graph,
            LoadOrder::new(names(&["D", "C", "B", "A"])),
            comparison,
        )
    }

    #[test]
    fn test_format_graph_lines_are_sorted() {
        let output = TextFormatter::new().format(&response(None, "")).unwrap();

        assert!(output.starts_with("Dependency graph for A (max depth: 3):\n"));
        assert!(output.contains("A: [B, C]\nB: [D]\nC: [D]\nD: []\n"));
    }

    #[test]
    fn test_format_load_order_numbered() {
        let output = TextFormatter::new().format(&response(None, "")).unwrap();

        assert!(output.contains("Load order:\n  1. D\n  2. C\n  3. B\n  4. A\n"));
        assert!(!output.contains("expected order"));
    }

    #[test]
    fn test_format_shows_filter() {
        let output = TextFormatter::new().format(&response(None, "test")).unwrap();
        assert!(output.contains("filter: \"test\""));
    }

    #[test]
    fn test_format_match_line() {
        let output = TextFormatter::new()
            .format(&response(Some(OrderComparison::Match), ""))
            .unwrap();

        assert!(output.contains("✅ Load order matches expected order"));
    }

    #[test]
    fn test_format_mismatch_reports_expected() {
        let comparison = OrderComparison::Mismatch {
            expected: names(&["A", "B", "C", "D"]),
        };
        let output = TextFormatter::new()
            .format(&response(Some(comparison), ""))
            .unwrap();

        assert!(output.contains("⚠️  Load order differs from expected order"));
        assert!(output.contains("Expected: [A, B, C, D]"));
    }

    #[test]
    fn test_format_empty_graph() {
        let response = ResolveResponse::new(
            PackageName::new("test-root".to_string()).unwrap(),
            TraversalPolicy::new(3, "test"),
            DependencyGraph::new(),
            LoadOrder::new(names(&["test-root"])),
            None,
        );

        let output = TextFormatter::new().format(&response).unwrap();

        assert!(output.contains("(no packages)"));
        assert!(output.contains("1. test-root"));
    }
}
