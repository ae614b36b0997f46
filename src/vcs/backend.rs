use std::path::Path;
use thiserror::Error;

/// Error types for VCS operations.
#[derive(Error, Debug)]
pub enum VcsError {
    #[error("command failed: {0}")]
    CommandFailed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The two version-control operations a commit run needs.
///
/// Both calls block until the underlying command returns. Implementations are
/// used from a single thread, so no `Send + Sync` bound is required.
pub trait VcsBackend {
    /// Raw output of the staged diff, stdout followed by stderr.
    fn staged_diff(&self) -> Result<String, VcsError>;

    /// Open the interactive commit flow with `template` as the message seed.
    /// Standard streams are inherited so the user's editor works normally.
    fn commit_with_template(&self, template: &Path) -> Result<(), VcsError>;
}
