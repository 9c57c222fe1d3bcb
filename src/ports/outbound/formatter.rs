use crate::application::dto::ResolveResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering a resolution result
///
/// Implementations decide the layout (plain text, JSON, ...). The response
/// is rendered as-is; formatters never re-run or alter the resolution.
pub trait ReportFormatter {
    /// Formats the graph, load order and optional comparison
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ResolveResponse) -> Result<String>;
}
