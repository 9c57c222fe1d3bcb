use crate::shared::Result;

/// OutputPresenter port for presenting the final report
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted dependency report is written.
pub trait OutputPresenter {
    /// Presents the formatted report to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link or its directory is missing
    fn present(&self, content: &str) -> Result<()>;
}
