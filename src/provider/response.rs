use serde::Deserialize;

use super::ProviderError;

/// Label some completion models put in front of the message.
const COMMIT_LABEL: &str = "Commit: ";

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

/// Chat completions return `message.content`, legacy completions return `text`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Choice {
    Chat { message: Message },
    Text { text: String },
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl Choice {
    fn into_message(self) -> String {
        match self {
            Choice::Chat { message } => message.content.trim_matches('\n').to_string(),
            Choice::Text { text } => {
                let text = text.trim_matches('\n');
                text.strip_prefix(COMMIT_LABEL)
                    .unwrap_or(text)
                    .trim_matches('\n')
                    .to_string()
            }
        }
    }
}

/// Extract the first candidate's text from a raw completion response body.
///
/// The result may be empty; deciding what an empty message means is left to
/// the caller.
pub fn parse_response(body: &str) -> Result<String, ProviderError> {
    let response: CompletionResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            return Err(match serde_json::from_str::<ApiErrorEnvelope>(body) {
                Ok(envelope) => ProviderError::ApiError(envelope.error.message),
                Err(_) => ProviderError::DecodeError(e),
            })
        }
    };

    response
        .choices
        .into_iter()
        .next()
        .map(Choice::into_message)
        .ok_or(ProviderError::NoCandidates)
}
