//! Email verification route handlers
//!
//! - `POST /verification/request`: issue a code and mail it
//! - `POST /verification/verify`: check a submitted code

pub mod request_code;
pub mod verify_code;

use actix_web::web;

/// Register the verification routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/verification")
            .route("/request", web::post().to(request_code::request_code))
            .route("/verify", web::post().to(verify_code::verify_code)),
    );
}
