use super::adjacency_list::parse_adjacency_list;
use crate::ports::outbound::{DependencyQuery, DependencySource, ProgressReporter};
use crate::resolution::domain::DependencyMap;
use crate::shared::error::DepOrderError;
use crate::shared::security::{check_readable_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter reading dependencies from a local file
///
/// Implements the DependencySource port for test mode. The whole file is
/// read and parsed; the query's traversal bounds are left to the graph builder.
pub struct FileSystemReader {
    path: PathBuf,
}

impl FileSystemReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file after the symlink, file type and size checks
    fn read_checked(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(DepOrderError::DependencyFileNotFound {
                path: self.path.clone(),
                suggestion: "Point repository_url (or --repository) at an existing dependency \
                             file, or disable test mode to query a registry."
                    .to_string(),
            }
            .into());
        }

        check_readable_file(&self.path, "dependency file", MAX_FILE_SIZE).map_err(|e| {
            DepOrderError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        fs::read_to_string(&self.path).map_err(|e| {
            DepOrderError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl DependencySource for FileSystemReader {
    fn load_dependencies(
        &self,
        _query: &DependencyQuery,
        reporter: &dyn ProgressReporter,
    ) -> Result<DependencyMap> {
        let content = self.read_checked()?;
        let dependencies = parse_adjacency_list(&content, &self.path)?;

        reporter.report(&format!(
            "✅ Read {} package(s) from {}",
            dependencies.len(),
            self.path.display()
        ));

        Ok(dependencies)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
