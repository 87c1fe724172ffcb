use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    config::{GatewayConfig, StructuredOutput, API_KEY_VAR},
    errors::{AppError, AppResult, GenerationError},
    models::domain::QuestionSet,
    services::prompt_builder::PromptPair,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<Value>,
}

impl ChatCompletionRequest {
    pub fn new(model: &str, prompts: PromptPair) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompts.system,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompts.user,
                },
            ],
            response_format: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

/// The one outbound call of the pipeline. Returns the first choice's
/// message content.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    fn is_configured(&self) -> bool;
    async fn complete(&self, request: ChatCompletionRequest) -> Result<String, GenerationError>;
}

pub struct HttpChatCompletionClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<SecretString>,
    structured_output: StructuredOutput,
}

impl HttpChatCompletionClient {
    pub fn new(config: GatewayConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url,
            api_key: config.api_key,
            structured_output: config.structured_output,
        })
    }

    fn api_key(&self) -> Result<&SecretString, GenerationError> {
        self.api_key
            .as_ref()
            .ok_or_else(|| GenerationError::Configuration(API_KEY_VAR.to_string()))
    }
}

#[async_trait]
impl ChatCompletionClient for HttpChatCompletionClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(
        &self,
        mut request: ChatCompletionRequest,
    ) -> Result<String, GenerationError> {
        let api_key = self.api_key()?;

        if request.response_format.is_none() {
            request.response_format = response_format(self.structured_output);
        }

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to send request to AI gateway: {}", e);
                GenerationError::Upstream {
                    status: None,
                    detail: e.to_string(),
                }
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read response body".to_string());

        if !(200..300).contains(&status) {
            return Err(classify_failure(status, body));
        }

        message_content(&body)
    }
}

/// Maps a non-success gateway status onto the error taxonomy.
pub fn classify_failure(status: u16, body: String) -> GenerationError {
    match status {
        429 => GenerationError::UpstreamRateLimited,
        402 => GenerationError::UpstreamPaymentRequired,
        _ => {
            log::error!("AI gateway error: {} {}", status, body);
            GenerationError::Upstream {
                status: Some(status),
                detail: body,
            }
        }
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions body.
pub fn message_content(body: &str) -> Result<String, GenerationError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("Could not parse AI gateway response: {} | body: {}", e, body);
        GenerationError::MalformedUpstreamReply(format!("invalid completion body: {}", e))
    })?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            log::error!("AI gateway response has no message content: {}", body);
            GenerationError::MalformedUpstreamReply("no message content in completion".to_string())
        })
}

pub fn response_format(mode: StructuredOutput) -> Option<Value> {
    match mode {
        StructuredOutput::None => None,
        StructuredOutput::JsonObject => Some(json!({ "type": "json_object" })),
        StructuredOutput::JsonSchema => {
            let schema = schemars::schema_for!(QuestionSet);
            Some(json!({
                "type": "json_schema",
                "json_schema": {
                    "name": "question_set",
                    "schema": schema,
                }
            }))
        }
    }
}
