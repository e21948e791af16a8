//! Data models
//!
//! Shared between the reservation manager and the console layer.
//! IDs are `i64`; room numbers are `i32` once validated.

pub mod guest;
pub mod reservation;
pub mod room;

// Re-exports
pub use guest::*;
pub use reservation::*;
pub use room::*;
