use thiserror::Error;

use crate::prompt::PromptError;

pub mod openai;
pub mod response;

pub use openai::{OpenAIConfig, OpenAIProvider};
pub use response::parse_response;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error(
        "OPENAI_API_KEY environment variable is not set. \
        You can get one from https://platform.openai.com/account/api-keys"
    )]
    MissingCredential,

    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("No text generated: the response body was empty")]
    EmptyResponse,

    #[error("Error unmarshalling JSON: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("API returned an error: {0}")]
    ApiError(String),

    #[error("No completion choice in response")]
    NoCandidates,

    #[error(transparent)]
    PromptError(#[from] PromptError),
}
