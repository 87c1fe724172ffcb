use std::sync::Arc;

use serde_json::Value;
use validator::Validate;

use crate::{
    config::API_KEY_VAR,
    errors::{AppResult, ErrorDetail, GenerationError},
    models::{
        domain::QuestionType,
        dto::request::{GenerateQuestionsRequest, GenerateVariedQuestionsRequest},
    },
    services::{
        gateway_client::{ChatCompletionClient, ChatCompletionRequest},
        prompt_builder::build_prompts,
        reply_extraction::extract_questions,
    },
};

/// Model and error granularity used by one endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationProfile {
    pub model: String,
    pub error_detail: ErrorDetail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    pub question_type: QuestionType,
    pub num_questions: u32,
}

/// The shared generation pipeline behind both endpoints.
pub struct QuestionService {
    client: Arc<dyn ChatCompletionClient>,
    blurt_profile: GenerationProfile,
    varied_profile: GenerationProfile,
}

impl QuestionService {
    pub fn new(
        client: Arc<dyn ChatCompletionClient>,
        blurt_model: &str,
        varied_model: &str,
    ) -> Self {
        Self {
            client,
            blurt_profile: GenerationProfile {
                model: blurt_model.to_string(),
                error_detail: ErrorDetail::Detailed,
            },
            varied_profile: GenerationProfile {
                model: varied_model.to_string(),
                error_detail: ErrorDetail::Generic,
            },
        }
    }

    /// `POST /generate-questions`: blurt questions, 429/402 passed through.
    pub async fn generate_blurt_questions(
        &self,
        request: GenerateQuestionsRequest,
        request_id: &str,
    ) -> AppResult<Value> {
        self.ensure_configured(request_id)
            .map_err(|e| e.into_app_error(self.blurt_profile.error_detail))?;
        request.validate()?;

        let options = GenerationOptions {
            question_type: QuestionType::Blurt,
            num_questions: request.num_questions(),
        };

        self.generate(&request.study_content, &options, &self.blurt_profile.model, request_id)
            .await
            .map_err(|e| e.into_app_error(self.blurt_profile.error_detail))
    }

    /// `POST /generate-varied-questions`: one question of the selected type,
    /// every failure reported as a 500.
    pub async fn generate_varied_questions(
        &self,
        request: GenerateVariedQuestionsRequest,
        request_id: &str,
    ) -> AppResult<Value> {
        self.ensure_configured(request_id)
            .map_err(|e| e.into_app_error(self.varied_profile.error_detail))?;
        request.validate()?;

        let options = GenerationOptions {
            question_type: QuestionType::from_selector(request.question_type.as_deref()),
            num_questions: 1,
        };

        self.generate(&request.study_content, &options, &self.varied_profile.model, request_id)
            .await
            .map_err(|e| e.into_app_error(self.varied_profile.error_detail))
    }

    pub async fn generate(
        &self,
        study_content: &str,
        options: &GenerationOptions,
        model: &str,
        request_id: &str,
    ) -> Result<Value, GenerationError> {
        self.ensure_configured(request_id)?;
        log::debug!(
            "[{}] validated: {:?} x{} with model {}",
            request_id,
            options.question_type,
            options.num_questions,
            model
        );

        let prompts = build_prompts(study_content, options.question_type, options.num_questions);
        let content = self
            .client
            .complete(ChatCompletionRequest::new(model, prompts))
            .await
            .inspect_err(|e| log::warn!("[{}] upstream call failed: {}", request_id, e))?;
        log::debug!("[{}] dispatched: {} chars of reply", request_id, content.len());

        let questions = extract_questions(&content)?;
        log::info!(
            "[{}] generated {} {:?} question(s)",
            request_id,
            questions["questions"].as_array().map_or(0, Vec::len),
            options.question_type
        );

        Ok(questions)
    }

    /// A missing key wins over every other request problem.
    fn ensure_configured(&self, request_id: &str) -> Result<(), GenerationError> {
        if self.client.is_configured() {
            return Ok(());
        }
        log::error!("[{}] {} is not configured", request_id, API_KEY_VAR);
        Err(GenerationError::Configuration(API_KEY_VAR.to_string()))
    }
}
