use std::io::Write;

use crate::vcs::{VcsBackend, VcsError};

/// Seed the interactive commit with `message` and hand the terminal to git.
///
/// The message goes through a uniquely named temp file that is removed once
/// git returns, whether the commit went through or not. A failed commit is
/// reported in preference to a failed cleanup.
pub fn commit_with_editor(backend: &dyn VcsBackend, message: &str) -> Result<(), VcsError> {
    let mut file = tempfile::Builder::new()
        .prefix("commit-message")
        .tempfile()?;
    file.write_all(message.as_bytes())?;
    file.flush()?;

    // Closes the handle; the path is still deleted when dropped.
    let template = file.into_temp_path();

    let committed = backend.commit_with_template(&template);
    let removed = template.close();

    committed?;
    removed?;
    Ok(())
}
