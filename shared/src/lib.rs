//! Shared types for the hotel front desk
//!
//! Room, guest and reservation models plus the unified error codes
//! used by the reservation manager and the console layer.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, ErrorCode};
pub use models::{Guest, Reservation, ReservationCreate, ReservationUpdate, Room, RoomCategory};
