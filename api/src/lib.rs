//! # LINKA API
//!
//! actix-web surface of the email verification workflow: request a code,
//! verify it, and a health probe. The binary in `main.rs` wires the
//! configured store and mail provider into [`create_app`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
