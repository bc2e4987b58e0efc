//! Application state and factory
//!
//! This module holds the shared application state and provides the
//! factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{web, App};
use tracing_actix_web::TracingLogger;

use linka_core::services::verification::VerificationService;
use linka_infra::mail::MailService;
use linka_shared::config::Environment;

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::cors::create_cors;
use crate::routes;

/// Default limit for JSON request bodies
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 16 * 1024;

/// Services shared by all request handlers
///
/// Built once at startup and handed to every worker through `web::Data`.
pub struct AppState {
    pub verification_service: VerificationService,
    pub mail_service: Arc<dyn MailService>,
    pub environment: Environment,
    pub max_payload_size: usize,
}

impl AppState {
    pub fn new(
        verification_service: VerificationService,
        mail_service: Arc<dyn MailService>,
    ) -> Self {
        Self {
            verification_service,
            mail_service,
            environment: Environment::default(),
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_max_payload_size(mut self, max_payload_size: usize) -> Self {
        self.max_payload_size = max_payload_size;
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors(app_state.environment);
    let json_config = web::JsonConfig::default()
        .limit(app_state.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // The last wrap is the outermost layer, so every request gets a span
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(routes::health::health_check))
        .configure(routes::verification::configure)
        .default_service(web::route().to(not_found))
}
