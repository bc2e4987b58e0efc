use actix_web::{web, HttpResponse};
use validator::Validate;

use linka_shared::utils::email::mask_email;

use crate::app::AppState;
use crate::dto::{RequestCodeRequest, RequestCodeResponse};
use crate::handlers::error::{handle_domain_error, mail_delivery_failed, validation_error_response};

/// Handler for POST /verification/request
///
/// Issues a fresh code for the email, replacing any pending one, and hands
/// it to the mail service.
///
/// # Request Body
///
/// ```json
/// { "email": "ana@uni.edu" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "ok": true, "expires_in": 600 }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid email
/// - 500 Internal Server Error: Verification store failure
/// - 503 Service Unavailable: Code stored but the email could not be sent
pub async fn request_code(
    state: web::Data<AppState>,
    request: web::Json<RequestCodeRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        tracing::warn!(
            email = %mask_email(&request.email),
            "Validation failed for code request"
        );
        return validation_error_response(&errors);
    }

    let issued = match state.verification_service.issue_code(&request.email).await {
        Ok(issued) => issued,
        Err(error) => return handle_domain_error(error),
    };

    if let Err(e) = state
        .mail_service
        .send_verification_code(&issued.email, &issued.code, issued.valid_for_minutes())
        .await
    {
        tracing::error!(
            email = %mask_email(&issued.email),
            provider = state.mail_service.provider_name(),
            error = %e,
            event = "verification_code_delivery_failed",
            "Failed to deliver verification code"
        );
        return mail_delivery_failed();
    }

    HttpResponse::Ok().json(RequestCodeResponse {
        ok: true,
        expires_in: (issued.expires_at - issued.issued_at).num_seconds(),
    })
}
