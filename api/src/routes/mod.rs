//! Route handlers
//!
//! - `health`: liveness probe
//! - `verification`: requesting and verifying email codes

pub mod health;
pub mod verification;
