use std::{env, time::Duration};

use secrecy::SecretString;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_BLURT_MODEL: &str = "google/gemini-2.5-flash-lite";
pub const DEFAULT_VARIED_MODEL: &str = "google/gemini-2.5-flash";
pub const API_KEY_VAR: &str = "LOVABLE_API_KEY";

/// Which `response_format` to ask the gateway for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructuredOutput {
    None,
    JsonObject,
    JsonSchema,
}

impl StructuredOutput {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Some(StructuredOutput::None),
            "json_object" => Some(StructuredOutput::JsonObject),
            "json_schema" => Some(StructuredOutput::JsonSchema),
            _ => None,
        }
    }
}

/// Everything the upstream client needs. Built once and handed to
/// `HttpChatCompletionClient::new`.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub url: String,
    pub api_key: Option<SecretString>,
    pub timeout: Duration,
    pub structured_output: StructuredOutput,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub blurt_model: String,
    pub varied_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub catalogue_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gateway: GatewayConfig {
                url: env::var("AI_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
                api_key: env::var(API_KEY_VAR)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .map(SecretString::from),
                timeout: Duration::from_secs(
                    env::var("UPSTREAM_TIMEOUT_SECS")
                        .ok()
                        .and_then(|t| t.parse().ok())
                        .unwrap_or(30),
                ),
                structured_output: env::var("STRUCTURED_OUTPUT")
                    .ok()
                    .and_then(|v| StructuredOutput::parse(&v))
                    .unwrap_or(StructuredOutput::JsonObject),
            },
            blurt_model: env::var("BLURT_MODEL").unwrap_or_else(|_| DEFAULT_BLURT_MODEL.to_string()),
            varied_model: env::var("VARIED_MODEL")
                .unwrap_or_else(|_| DEFAULT_VARIED_MODEL.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            catalogue_path: env::var("CATALOGUE_PATH").ok().filter(|p| !p.is_empty()),
        }
    }

    /// Logs a warning for settings that will make every generation request fail.
    /// The server still starts so the failure is reported per request.
    pub fn warn_if_incomplete(&self) {
        if self.gateway.api_key.is_none() {
            log::warn!(
                "{} is not set; question generation requests will fail until it is configured",
                API_KEY_VAR
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gateway: GatewayConfig {
                url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
                api_key: Some(SecretString::from("test_api_key".to_string())),
                timeout: Duration::from_secs(5),
                structured_output: StructuredOutput::JsonObject,
            },
            blurt_model: DEFAULT_BLURT_MODEL.to_string(),
            varied_model: DEFAULT_VARIED_MODEL.to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            catalogue_path: None,
        }
    }
}
