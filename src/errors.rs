use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Payment required: {0}")]
    PaymentRequired(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Malformed upstream reply: {0}")]
    MalformedReply(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::RateLimited(_) => "RATE_LIMITED",
            AppError::PaymentRequired(_) => "PAYMENT_REQUIRED",
            AppError::UpstreamError(_) => "UPSTREAM_ERROR",
            AppError::MalformedReply(_) => "MALFORMED_REPLY",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// The client-facing message, without the variant prefix used in logs.
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::RateLimited(msg)
            | AppError::PaymentRequired(msg)
            | AppError::UpstreamError(msg)
            | AppError::MalformedReply(msg)
            | AppError::ConfigurationError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedReply(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.message().to_string(),
            code: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<actix_web::error::JsonPayloadError> for AppError {
    fn from(err: actix_web::error::JsonPayloadError) -> Self {
        AppError::ValidationError(format!("Invalid request body: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub const RATE_LIMITED_MESSAGE: &str = "Rate limits exceeded, please try again later.";
pub const PAYMENT_REQUIRED_MESSAGE: &str =
    "Payment required, please add funds to your Lovable AI workspace.";
pub const GATEWAY_ERROR_MESSAGE: &str = "AI gateway error";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate questions";
pub const MALFORMED_REPLY_MESSAGE: &str = "Invalid AI response format";

/// Failures of the question generation pipeline, before they are mapped to
/// an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{0} is not configured")]
    Configuration(String),

    #[error("upstream rate limited the request")]
    UpstreamRateLimited,

    #[error("upstream requires payment")]
    UpstreamPaymentRequired,

    #[error("upstream failed (status {status:?}): {detail}")]
    Upstream { status: Option<u16>, detail: String },

    #[error("malformed upstream reply: {0}")]
    MalformedUpstreamReply(String),
}

/// How much of the upstream failure the caller gets to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDetail {
    /// 429 and 402 are passed through with their own messages.
    Detailed,
    /// Every upstream failure is a 500.
    Generic,
}

impl GenerationError {
    pub fn into_app_error(self, detail: ErrorDetail) -> AppError {
        match (self, detail) {
            (GenerationError::Configuration(var), _) => {
                AppError::ConfigurationError(format!("{} is not configured", var))
            }
            (GenerationError::MalformedUpstreamReply(_), _) => {
                AppError::MalformedReply(MALFORMED_REPLY_MESSAGE.to_string())
            }
            (GenerationError::UpstreamRateLimited, ErrorDetail::Detailed) => {
                AppError::RateLimited(RATE_LIMITED_MESSAGE.to_string())
            }
            (GenerationError::UpstreamPaymentRequired, ErrorDetail::Detailed) => {
                AppError::PaymentRequired(PAYMENT_REQUIRED_MESSAGE.to_string())
            }
            (GenerationError::Upstream { .. }, ErrorDetail::Detailed) => {
                AppError::UpstreamError(GATEWAY_ERROR_MESSAGE.to_string())
            }
            (_, ErrorDetail::Generic) => AppError::UpstreamError(GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::RateLimited("test".into()).status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AppError::PaymentRequired("test".into()).status_code(),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            AppError::MalformedReply("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::ConfigurationError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::UpstreamError("AI gateway error".into());
        assert_eq!(err.to_string(), "Upstream error: AI gateway error");
        assert_eq!(err.message(), "AI gateway error");
    }

    #[actix_web::test]
    async fn test_error_response_body_carries_message_and_code() {
        let err = AppError::RateLimited("Rate limits exceeded, please try again later.".into());
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Rate limits exceeded, please try again later.");
        assert_eq!(body["code"], "RATE_LIMITED");
    }

    #[test]
    fn test_detailed_generation_errors_keep_upstream_statuses() {
        let rate_limited =
            GenerationError::UpstreamRateLimited.into_app_error(ErrorDetail::Detailed);
        assert_eq!(rate_limited.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(rate_limited.message(), RATE_LIMITED_MESSAGE);

        let payment =
            GenerationError::UpstreamPaymentRequired.into_app_error(ErrorDetail::Detailed);
        assert_eq!(payment.status_code(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(payment.message(), PAYMENT_REQUIRED_MESSAGE);

        let upstream = GenerationError::Upstream {
            status: Some(503),
            detail: "secret upstream body".into(),
        }
        .into_app_error(ErrorDetail::Detailed);
        assert_eq!(upstream.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(upstream.message(), GATEWAY_ERROR_MESSAGE);
    }

    #[test]
    fn test_generic_generation_errors_collapse_to_500() {
        for err in [
            GenerationError::UpstreamRateLimited,
            GenerationError::UpstreamPaymentRequired,
            GenerationError::Upstream { status: None, detail: "timeout".into() },
        ] {
            let app_error = err.into_app_error(ErrorDetail::Generic);
            assert_eq!(app_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(app_error.message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_configuration_and_malformed_errors_ignore_detail_level() {
        for detail in [ErrorDetail::Detailed, ErrorDetail::Generic] {
            let config = GenerationError::Configuration("LOVABLE_API_KEY".into())
                .into_app_error(detail);
            assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(config.message(), "LOVABLE_API_KEY is not configured");

            let malformed = GenerationError::MalformedUpstreamReply("no json".into())
                .into_app_error(detail);
            assert_eq!(malformed.message(), MALFORMED_REPLY_MESSAGE);
        }
    }
}
