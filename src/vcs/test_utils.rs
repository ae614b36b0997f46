//! Shared test utilities for VCS tests.
//!
//! Provides RepoGuard for creating temporary git repositories and
//! FakeBackend for exercising the pipeline without git.

use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Mutex, MutexGuard, OnceLock};

use super::{VcsBackend, VcsError};

/// Global lock for tests that change the current working directory.
/// Prevents concurrent tests from interfering with each other.
pub fn cwd_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Run a git command in a directory.
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(dir)
        .args(args)
        .status()
        .expect("failed to spawn git");
    assert!(status.success(), "git command failed: {:?}", args);
}

/// Run a git command in a directory and return its stdout.
pub fn git_output(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to spawn git");
    assert!(output.status.success(), "git command failed: {:?}", args);
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// RAII guard for a temporary git repository.
/// Creates a git repo, changes to it, and cleans up on drop.
pub struct RepoGuard {
    _lock: MutexGuard<'static, ()>,
    _temp: tempfile::TempDir,
    pub dir: PathBuf,
    original: PathBuf,
}

impl RepoGuard {
    /// Create a new temporary git repository with an initial commit.
    pub fn new() -> Self {
        // Handle poisoned mutex (from previous panics in tests)
        let lock = match cwd_lock().lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let original = env::current_dir().expect("failed to get cwd");
        let temp = tempfile::Builder::new()
            .prefix("acommit-test")
            .tempdir()
            .expect("failed to create temp dir");
        let dir = temp.path().to_path_buf();

        git(&dir, &["init"]);
        git(&dir, &["config", "user.email", "test@example.com"]);
        git(&dir, &["config", "user.name", "Test User"]);
        git(&dir, &["config", "commit.gpgsign", "false"]);
        fs::write(dir.join("README.md"), "hello\n").expect("failed to write file");
        git(&dir, &["add", "."]);
        git(&dir, &["commit", "-m", "init"]);

        env::set_current_dir(&dir).expect("failed to set cwd");

        Self {
            _lock: lock,
            _temp: temp,
            dir,
            original,
        }
    }
}

impl Drop for RepoGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

/// In-memory [`VcsBackend`] that serves a fixed diff and records every
/// commit template it is handed.
pub struct FakeBackend {
    diff: String,
    fail_commit: bool,
    templates: RefCell<Vec<RecordedTemplate>>,
}

/// A template as seen while the commit command was running.
#[derive(Debug, Clone)]
pub struct RecordedTemplate {
    pub path: PathBuf,
    pub content: String,
}

impl FakeBackend {
    pub fn with_diff(diff: &str) -> Self {
        Self {
            diff: diff.to_string(),
            fail_commit: false,
            templates: RefCell::new(Vec::new()),
        }
    }

    /// Make the commit step exit non-zero after recording the template.
    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    pub fn templates(&self) -> Vec<RecordedTemplate> {
        self.templates.borrow().clone()
    }
}

impl VcsBackend for FakeBackend {
    fn staged_diff(&self) -> Result<String, VcsError> {
        Ok(self.diff.clone())
    }

    fn commit_with_template(&self, template: &Path) -> Result<(), VcsError> {
        let content = fs::read_to_string(template).expect("template should exist during commit");
        self.templates.borrow_mut().push(RecordedTemplate {
            path: template.to_path_buf(),
            content,
        });

        if self.fail_commit {
            return Err(VcsError::CommandFailed("git commit exit status: 1".into()));
        }
        Ok(())
    }
}
