use std::path::Path;
use std::process::{Command, Stdio};

use super::backend::{VcsBackend, VcsError};

/// Git backend using git CLI commands.
pub struct GitBackend {
    /// Forced `GIT_EDITOR` for the commit step; `None` leaves the user's choice.
    editor: Option<String>,
}

impl GitBackend {
    pub fn new() -> Self {
        GitBackend { editor: None }
    }

    #[cfg(test)]
    pub fn with_editor(editor: &str) -> Self {
        GitBackend {
            editor: Some(editor.to_string()),
        }
    }

    /// Run git and return stdout and stderr concatenated, the way a terminal
    /// would show them.
    fn run_git_combined(&self, args: &[&str]) -> Result<String, VcsError> {
        let output = Command::new("git").args(args).output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(VcsError::CommandFailed(format!(
                "git {} ({}): {}",
                args.join(" "),
                output.status,
                combined.trim()
            )));
        }

        Ok(combined)
    }
}

impl Default for GitBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsBackend for GitBackend {
    fn staged_diff(&self) -> Result<String, VcsError> {
        self.run_git_combined(&["diff", "--staged"])
    }

    fn commit_with_template(&self, template: &Path) -> Result<(), VcsError> {
        tracing::debug!(template = %template.display(), "launching git commit");

        let mut command = Command::new("git");
        command
            .arg("commit")
            .arg("-t")
            .arg(template)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(editor) = &self.editor {
            command.env("GIT_EDITOR", editor);
        }

        let status = command.status()?;

        if !status.success() {
            return Err(VcsError::CommandFailed(format!("git commit {}", status)));
        }

        Ok(())
    }
}
