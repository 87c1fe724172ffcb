use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One question as the model is asked to produce it. Replies are passed
/// through untyped, so this shape is what we request, not what we enforce.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question: String,
    pub marks: i64, // 1-6 for exam questions, 5-10 for blurts
    pub expected_key_points: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuestionSet {
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Blurt,
    Exam,
}

impl QuestionType {
    /// Anything other than `"exam"` selects blurt questions.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("exam") => QuestionType::Exam,
            _ => QuestionType::Blurt,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Blurt => "BLURT-STYLE",
            QuestionType::Exam => "EXAM-STYLE",
        }
    }
}
