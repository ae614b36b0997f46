//! Version-control access.
//!
//! Everything acommit asks of git goes through [`VcsBackend`], so the pipeline
//! can be exercised against a recording fake in tests.

mod backend;
mod git;
#[cfg(test)]
pub mod test_utils;

pub use backend::{VcsBackend, VcsError};
pub use git::GitBackend;
