use spinoff::{spinners, Color, Spinner};

use super::editor::commit_with_editor;
use crate::{
    ai_prompt::AIPrompt,
    diff::StagedDiff,
    error::{AcommitError, Stage},
    prompt::PromptFile,
    provider::{parse_response, OpenAIProvider, ProviderError},
    vcs::VcsBackend,
};

/// Staged diff in, edited commit out. Stops at the first failing stage.
pub struct CommitCommand {
    provider: OpenAIProvider,
    prompt_file: Option<PromptFile>,
    show_spinner: bool,
}

impl CommitCommand {
    pub fn new(provider: OpenAIProvider, prompt_file: Option<PromptFile>) -> Self {
        CommitCommand {
            provider,
            prompt_file,
            show_spinner: true,
        }
    }

    pub fn without_spinner(mut self) -> Self {
        self.show_spinner = false;
        self
    }

    pub async fn execute(&self, backend: &dyn VcsBackend) -> Result<(), AcommitError> {
        let diff = StagedDiff::capture(backend).map_err(AcommitError::during(Stage::Diff))?;
        tracing::debug!(bytes = diff.diff.len(), "captured staged diff");

        let prompt = self
            .provider
            .prepare_prompt(&diff, self.prompt_file.as_ref())
            .map_err(AcommitError::during(Stage::Generate))?;
        let body = self
            .request(&prompt)
            .await
            .map_err(AcommitError::during(Stage::Generate))?;

        let message = parse_response(&body).map_err(AcommitError::during(Stage::Parse))?;
        if message.is_empty() {
            return Err(AcommitError::during(Stage::Parse)(AcommitError::EmptyMessage));
        }
        tracing::debug!(chars = message.chars().count(), "parsed commit message");

        commit_with_editor(backend, &message).map_err(AcommitError::during(Stage::Commit))
    }

    async fn request(&self, prompt: &AIPrompt) -> Result<String, ProviderError> {
        if !self.show_spinner {
            return self.provider.generate_text(prompt).await;
        }

        let mut spinner = Spinner::new(
            spinners::Dots,
            "Generating commit message...",
            Color::Blue,
        );
        let result = self.provider.generate_text(prompt).await;
        match &result {
            Ok(_) => spinner.clear(),
            Err(_) => spinner.fail("Request failed"),
        }
        result
    }
}
