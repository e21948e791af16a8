//! Error reporting for the front desk
//!
//! - [`ErrorCode`]: numeric code per operator-facing failure
//! - [`AppError`]: code, message and structured details
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ReservationNotFound);
//! assert_eq!(err.to_string(), "Reservation not found.");
//!
//! let err = AppError::invalid_room_number(11).with_detail("flow", "add");
//! assert_eq!(err.code, ErrorCode::InvalidRoomNumber);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::AppError;
