//! Parser for the line-oriented dependency file format.
//!
//! ```text
//! # comment
//! app: http, json
//! http: io
//! io:
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Every other line must
//! contain a colon; the text before the first colon is the package, the text
//! after it a comma-separated list of dependencies. A package listed twice
//! keeps its last line.

use crate::resolution::domain::DependencyMap;
use crate::shared::error::DepOrderError;
use crate::shared::Result;
use std::path::Path;

/// Parses dependency file content into a DependencyMap
///
/// # Arguments
/// * `content` - Raw file content
/// * `path` - File path, used only in error messages
///
/// # Errors
/// Returns `DepOrderError::DependencyFileFormat` for the first line without a colon
pub fn parse_adjacency_list(content: &str, path: &Path) -> Result<DependencyMap> {
    let mut dependencies = DependencyMap::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((package, deps)) = line.split_once(':') else {
            return Err(DepOrderError::DependencyFileFormat {
                path: path.to_path_buf(),
                line: index + 1,
                content: line.to_string(),
            }
            .into());
        };

        let deps: Vec<String> = deps
            .split(',')
            .map(str::trim)
            .filter(|dep| !dep.is_empty())
            .map(str::to_string)
            .collect();

        dependencies.insert(package.trim().to_string(), deps);
    }

    Ok(dependencies)
}
