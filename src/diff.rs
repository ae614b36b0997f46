use thiserror::Error;

use crate::error::AcommitError;
use crate::vcs::VcsBackend;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("No staged changes.")]
    NoChanges,
}

/// The staged changes of the working copy, trimmed.
#[derive(Clone, Debug)]
pub struct StagedDiff {
    pub diff: String,
}

impl StagedDiff {
    pub fn capture(backend: &dyn VcsBackend) -> Result<Self, AcommitError> {
        let raw = backend.staged_diff()?;
        Ok(Self::from_raw(&raw)?)
    }

    fn from_raw(raw: &str) -> Result<Self, DiffError> {
        let diff = raw.trim();
        if diff.is_empty() {
            return Err(DiffError::NoChanges);
        }

        Ok(StagedDiff {
            diff: diff.to_string(),
        })
    }
}
