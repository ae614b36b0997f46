use crate::{diff::DiffError, prompt::PromptError, provider::ProviderError, vcs::VcsError};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcommitError {
    #[error("{0}")]
    GitDiffError(#[from] DiffError),

    #[error("{0}")]
    VcsError(#[from] VcsError),

    #[error(transparent)]
    PromptError(#[from] PromptError),

    #[error(transparent)]
    ProviderError(#[from] ProviderError),

    #[error("No text generated.")]
    EmptyMessage,

    #[error("{stage}: {source}")]
    Stage {
        stage: Stage,
        source: Box<AcommitError>,
    },
}

/// Pipeline step an error occurred in, used to label the final diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Diff,
    Generate,
    Parse,
    Commit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Diff => "running git diff --staged",
            Stage::Generate => "generating commit message",
            Stage::Parse => "parsing completion response",
            Stage::Commit => "running git commit",
        };
        write!(f, "{label}")
    }
}

impl AcommitError {
    /// Adapter for `map_err` that labels an error with the stage it came from.
    pub fn during<E: Into<AcommitError>>(stage: Stage) -> impl FnOnce(E) -> AcommitError {
        move |source| AcommitError::Stage {
            stage,
            source: Box::new(source.into()),
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            AcommitError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
