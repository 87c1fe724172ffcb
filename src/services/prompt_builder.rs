use crate::{
    constants::prompts::{
        BLURT_SYSTEM_PROMPT, BLURT_USER_REQUIREMENTS, EXAM_SYSTEM_PROMPT, EXAM_USER_REQUIREMENTS,
        REPLY_SHAPE_INSTRUCTIONS,
    },
    models::domain::QuestionType,
};

/// The system and user messages sent to the gateway for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Builds both prompts. Pure; `num_questions` below 1 is treated as 1.
pub fn build_prompts(
    study_content: &str,
    question_type: QuestionType,
    num_questions: u32,
) -> PromptPair {
    let count = num_questions.max(1);

    let (role_prompt, marks_hint, requirements) = match question_type {
        QuestionType::Blurt => (BLURT_SYSTEM_PROMPT, "<number between 5-10>", BLURT_USER_REQUIREMENTS),
        QuestionType::Exam => (EXAM_SYSTEM_PROMPT, "<number between 1-6>", EXAM_USER_REQUIREMENTS),
    };

    let system = format!(
        "{}\n\n{}",
        role_prompt.replace("{count}", &count.to_string()),
        REPLY_SHAPE_INSTRUCTIONS.replace("{marks}", marks_hint)
    );

    let user = format!(
        "Study Content:\n\n{}\n\nGenerate {} UNIQUE {} question(s) based on this content.\n\n{}\n\nGenerate NOW with maximum variety.",
        study_content,
        count,
        question_type.label(),
        requirements
    );

    PromptPair { system, user }
}
