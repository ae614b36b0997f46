use serde::Serialize;

use super::ProviderError;
use crate::{
    ai_prompt::AIPrompt,
    diff::StagedDiff,
    prompt::{PromptError, PromptFile},
};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

// Configuration type
#[derive(Clone)]
pub struct OpenAIConfig {
    api_key: Option<String>,
    model: String,
    api_base_url: String,
    max_tokens: u32,
}

impl OpenAIConfig {
    pub fn new(api_key: Option<String>, max_tokens: u32) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: CHAT_COMPLETIONS_URL.to_string(),
            max_tokens,
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }
}

pub struct OpenAIProvider {
    client: reqwest::Client,
    config: OpenAIConfig,
}

impl OpenAIProvider {
    pub fn new(client: reqwest::Client, config: OpenAIConfig) -> Self {
        Self { client, config }
    }

    /// Build the request prompt for `diff` from the instructions in
    /// `prompt_file`, provisioning the file on first use. `None` means no
    /// home directory could be found to hold the file.
    pub fn prepare_prompt(
        &self,
        diff: &StagedDiff,
        prompt_file: Option<&PromptFile>,
    ) -> Result<AIPrompt, ProviderError> {
        // Checked before the prompt file is touched, not just before the request.
        self.api_key()?;
        let prompt_file = prompt_file.ok_or(PromptError::NoHomeDirectory)?;

        tracing::debug!(path = %prompt_file.path().display(), "loading prompt");
        let template = prompt_file.ensure_exists_with_default()?;
        Ok(AIPrompt::build_commit_prompt(template, diff))
    }

    /// Send one completion request and return the raw response body.
    pub async fn generate_text(&self, prompt: &AIPrompt) -> Result<String, ProviderError> {
        let api_key = self.api_key()?;
        let payload = self.build_request(prompt);

        tracing::debug!(
            url = %self.config.api_base_url,
            model = %self.config.model,
            max_tokens = self.config.max_tokens,
            diff_bytes = prompt.user_prompt.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&self.config.api_base_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, body_bytes = body.len(), "received completion response");

        if body.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(body)
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ProviderError::MissingCredential),
        }
    }

    fn build_request<'a>(&'a self, prompt: &'a AIPrompt) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user_prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
        }
    }
}
