use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PROMPT: &str = "You are to act as the author of a commit message in git. \
Your mission is to create clean and comprehensive commit messages in the gitmoji convention with emoji and explain why a change was done. \
I'll send you an output of 'git diff --staged' command, and you convert it into a commit message. \
Add a short description of WHY the changes are done after the commit message. \
Don't start it with 'This commit', just describe the changes. \
Use the present tense. \
Commit title must not be longer than 74 characters.";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine home directory for the prompt file")]
    NoHomeDirectory,
}

/// The user-editable instruction file sent as the system message.
///
/// The file is provisioned with [`DEFAULT_PROMPT`] the first time it is
/// needed and never written again afterwards.
#[derive(Debug, Clone)]
pub struct PromptFile {
    path: PathBuf,
}

impl PromptFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the prompt, creating the file with the default text if it is absent.
    pub fn ensure_exists_with_default(&self) -> Result<String, PromptError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                println!("Using prompt from {}", self.path.display());
                Ok(content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                println!(
                    "No prompt file found. Creating one at {}",
                    self.path.display()
                );
                self.provision()?;
                Ok(DEFAULT_PROMPT.to_string())
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn provision(&self) -> Result<(), PromptError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // create_new: a file that appeared since the read is an error, not
        // something to overwrite.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(DEFAULT_PROMPT.as_bytes())
            .map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), "provisioned default prompt");
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> PromptError {
        PromptError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
