//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error the console layer reports to the operator:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for logging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (lookup keys, offending values)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// No reservation for this guest
    pub fn reservation_not_found(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self::new(ErrorCode::ReservationNotFound)
            .with_detail("guest_name", name.into())
            .with_detail("guest_phone", phone.into())
    }

    /// Room number outside the inventory
    pub fn invalid_room_number(number: i64) -> Self {
        Self::new(ErrorCode::InvalidRoomNumber).with_detail("room_number", number)
    }

    /// Room held by another reservation
    pub fn room_occupied(number: i32) -> Self {
        Self::with_message(
            ErrorCode::RoomOccupied,
            format!("Room {} is already occupied.", number),
        )
        .with_detail("room_number", number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::ReservationNotFound);
        assert_eq!(err.code, ErrorCode::ReservationNotFound);
        assert_eq!(err.message, "Reservation not found.");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::new(ErrorCode::InvalidRoomNumber)
            .with_detail("room_number", 0)
            .with_detail("flow", "update");

        let details = err.details.unwrap();
        assert_eq!(details.get("room_number").unwrap(), 0);
        assert_eq!(details.get("flow").unwrap(), "update");
    }

    #[test]
    fn test_reservation_constructors() {
        let err = AppError::reservation_not_found("Bob", "000");
        assert_eq!(err.code, ErrorCode::ReservationNotFound);
        let details = err.details.as_ref().unwrap();
        assert_eq!(details.get("guest_name").unwrap(), "Bob");
        assert_eq!(details.get("guest_phone").unwrap(), "000");

        let err = AppError::invalid_room_number(11);
        assert_eq!(err.code, ErrorCode::InvalidRoomNumber);
        assert_eq!(err.message, "Invalid room number.");
        assert_eq!(err.details.unwrap().get("room_number").unwrap(), 11);

        let err = AppError::room_occupied(3);
        assert_eq!(err.code, ErrorCode::RoomOccupied);
        assert_eq!(err.to_string(), "Room 3 is already occupied.");
    }
}
