use crate::diff::StagedDiff;

pub struct AIPrompt {
    pub system_prompt: String,
    pub user_prompt: String,
}

impl AIPrompt {
    /// The instruction template goes out as the system message and the diff,
    /// untouched, as the user message.
    pub fn build_commit_prompt(template: String, diff: &StagedDiff) -> Self {
        AIPrompt {
            system_prompt: template,
            user_prompt: diff.diff.clone(),
        }
    }
}
