use serde::Deserialize;
use validator::Validate;

pub const MAX_STUDY_CONTENT_CHARS: u64 = 100_000;
pub const MAX_NUM_QUESTIONS: u32 = 10;

/// Body of `POST /generate-questions`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    // Empty content is allowed; the prompt is still well formed.
    #[validate(length(max = MAX_STUDY_CONTENT_CHARS))]
    pub study_content: String,

    #[validate(range(min = 1, max = MAX_NUM_QUESTIONS))]
    pub num_questions: Option<u32>,
}

impl GenerateQuestionsRequest {
    pub fn num_questions(&self) -> u32 {
        self.num_questions.unwrap_or(1)
    }
}

/// Body of `POST /generate-varied-questions`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVariedQuestionsRequest {
    #[validate(length(max = MAX_STUDY_CONTENT_CHARS))]
    pub study_content: String,

    pub question_type: Option<String>,
}
