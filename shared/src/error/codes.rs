//! Error codes for the front desk
//!
//! - 4xxx: Reservation errors
//! - 7xxx: Room errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum, serialized as its u16 value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 4xxx: Reservation ====================
    /// No reservation matches the guest name and phone
    ReservationNotFound = 4001,

    // ==================== 7xxx: Room ====================
    /// Room is held by another reservation
    RoomOccupied = 7001,
    /// Room number is outside the inventory
    InvalidRoomNumber = 7002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ReservationNotFound => "Reservation not found.",
            ErrorCode::RoomOccupied => "Room is already occupied.",
            ErrorCode::InvalidRoomNumber => "Invalid room number.",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            4001 => Ok(ErrorCode::ReservationNotFound),
            7001 => Ok(ErrorCode::RoomOccupied),
            7002 => Ok(ErrorCode::InvalidRoomNumber),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ReservationNotFound.code(), 4001);
        assert_eq!(ErrorCode::RoomOccupied.code(), 7001);
        assert_eq!(ErrorCode::InvalidRoomNumber.code(), 7002);
    }

    #[test]
    fn test_try_from_u16() {
        assert_eq!(ErrorCode::try_from(7002), Ok(ErrorCode::InvalidRoomNumber));
        assert_eq!(ErrorCode::try_from(4001), Ok(ErrorCode::ReservationNotFound));
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::InvalidRoomNumber).unwrap();
        assert_eq!(json, "7002");

        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::ReservationNotFound);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }
}
