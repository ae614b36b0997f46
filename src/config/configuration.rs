use std::env;
use std::path::{Path, PathBuf};

use dirs::home_dir;

use crate::config::cli::Cli;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AcommitConfig {
    pub api_key: Option<String>,
    pub max_tokens: u32,
    /// `None` when no home directory is known; reported by the prompt step.
    pub prompt_path: Option<PathBuf>,
}

impl AcommitConfig {
    pub fn build(cli: &Cli) -> Self {
        Self::from_parts(cli, env::var(API_KEY_ENV).ok(), home_dir().as_deref())
    }

    pub fn from_parts(cli: &Cli, api_key: Option<String>, home: Option<&Path>) -> Self {
        AcommitConfig {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            max_tokens: cli.max_tokens,
            prompt_path: home.map(Self::prompt_path),
        }
    }

    fn prompt_path(home: &Path) -> PathBuf {
        let mut path = home.to_path_buf();
        path.push(".config");
        path.push("acommit");
        path.push("prompt.txt");
        path
    }
}
