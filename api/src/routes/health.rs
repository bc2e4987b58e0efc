use actix_web::{web, HttpResponse};

use crate::app::AppState;

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "linka-api",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.environment.to_string(),
        "mail_provider": state.mail_service.provider_name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
