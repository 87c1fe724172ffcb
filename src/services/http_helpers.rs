use actix_web::{web, HttpResponse};

use crate::errors::AppError;

pub const CORS_ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];
pub const CORS_ALLOWED_HEADERS_VALUE: &str = "authorization, x-client-info, apikey, content-type";

/// Large enough for the longest allowed study content after JSON escaping.
const JSON_BODY_LIMIT: usize = 1024 * 1024;

/// Creates the empty success response for a pre-flight request
pub fn preflight_response() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Headers", CORS_ALLOWED_HEADERS_VALUE))
        .insert_header(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .finish()
}

/// JSON extractor config that reports body errors as `{error}` with a 400
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| AppError::from(err).into())
}
