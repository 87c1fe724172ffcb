use actix_web::{options, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{GenerateQuestionsRequest, GenerateVariedQuestionsRequest},
    services::http_helpers::preflight_response,
};

#[post("/generate-questions")]
pub async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
    http_request: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&http_request).unwrap_or_default();
    let questions = state
        .question_service
        .generate_blurt_questions(request.into_inner(), &request_id)
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[post("/generate-varied-questions")]
pub async fn generate_varied_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateVariedQuestionsRequest>,
    http_request: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&http_request).unwrap_or_default();
    let questions = state
        .question_service
        .generate_varied_questions(request.into_inner(), &request_id)
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

// Pre-flights without CORS request headers bypass the Cors middleware.
#[options("/generate-questions")]
pub async fn generate_questions_preflight() -> HttpResponse {
    preflight_response()
}

#[options("/generate-varied-questions")]
pub async fn generate_varied_questions_preflight() -> HttpResponse {
    preflight_response()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_questions)
        .service(generate_questions_preflight)
        .service(generate_varied_questions)
        .service(generate_varied_questions_preflight);
}
