//! CORS middleware configuration for cross-origin requests.
//!
//! Development is permissive so local frontends and tools can reach the
//! API. Production only admits the origins listed in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use linka_shared::config::Environment;

const DEFAULT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance configured for the given environment.
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors(environment: Environment) -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_AGE);

    if environment.is_production() {
        create_production_cors(max_age, allowed_origins())
    } else {
        create_development_cors(max_age)
    }
}

fn allowed_origins() -> Vec<String> {
    env::var("ALLOWED_ORIGINS")
        .map(|origins| parse_origins(&origins))
        .unwrap_or_default()
}

pub(crate) fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::debug!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize, origins: Vec<String>) -> Cors {
    tracing::info!(origins = origins.len(), "Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(max_age);

    for origin in &origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
