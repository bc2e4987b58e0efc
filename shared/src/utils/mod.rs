//! Common utility functions

pub mod email;

pub use email::{is_plausible_email, mask_email, normalize_email};
