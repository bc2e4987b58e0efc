use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};

/// Handler for POST /verification/verify
///
/// Every outcome of a well-formed attempt is a 200 carrying the status;
/// only malformed input and store failures are errors.
///
/// # Request Body
///
/// ```json
/// { "email": "ana@uni.edu", "code": "482913" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "status": "VERIFIED" }
/// ```
/// `status` is one of `VERIFIED`, `MISMATCH`, `EXPIRED`, `NOT_FOUND`.
///
/// ## Errors
/// - 400 Bad Request: Invalid email or code shape
/// - 500 Internal Server Error: Verification store failure
pub async fn verify_code(
    state: web::Data<AppState>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .verification_service
        .verify_code(&request.email, &request.code)
        .await
    {
        Ok(status) => HttpResponse::Ok().json(VerifyCodeResponse { status }),
        Err(error) => handle_domain_error(error),
    }
}
