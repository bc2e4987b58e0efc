use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use linka_api::telemetry::init_tracing;
use linka_api::{create_app, AppState};
use linka_core::services::verification::{VerificationService, VerificationServiceConfig};
use linka_infra::mail::create_mail_service;
use linka_infra::store::create_store;
use linka_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!(
        environment = %config.environment,
        store = ?config.store.backend,
        mail_provider = ?config.mail.provider,
        code_ttl_minutes = config.verification.code_ttl_minutes,
        "Starting LINKA API server"
    );

    let store = create_store(&config.store, &config.verification)
        .await
        .context("failed to initialize verification store")?;
    let verification_service = VerificationService::new(
        store,
        VerificationServiceConfig::from(&config.verification),
    );
    let mail_service = create_mail_service(&config.mail);

    let app_state = web::Data::new(
        AppState::new(verification_service, mail_service)
            .with_environment(config.environment)
            .with_max_payload_size(config.server.max_payload_size),
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")?;

    info!("Server stopped");
    Ok(())
}
