//! Utilities
//!
//! - [`AppError`] - application error type (from shared::error)
//! - logging setup

pub mod logger;

pub use shared::error::{AppError, ErrorCode};
