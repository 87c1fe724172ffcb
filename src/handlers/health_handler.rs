use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let gateway_configured = state.gateway.is_configured();

    let response = serde_json::json!({
        "status": if gateway_configured { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "ai_gateway": if gateway_configured { "ok" } else { "missing_api_key" },
            "catalogue_topics": state.catalogue.topics().len()
        },
        "models": {
            "blurt": state.config.blurt_model,
            "varied": state.config.varied_model
        }
    });

    if gateway_configured {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
