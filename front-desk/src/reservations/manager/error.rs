use shared::error::AppError;
use thiserror::Error;

/// Manager errors
///
/// Every variant is an expected outcome of operator input; none of them
/// leave the manager in a partially updated state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManagerError {
    #[error("Reservation not found: {name} / {phone}")]
    NotFound { name: String, phone: String },

    #[error("Invalid room number: {0}")]
    InvalidRoomNumber(i64),

    #[error("Room is already occupied: {0}")]
    RoomOccupied(i32),
}

impl ManagerError {
    pub fn not_found(name: &str, phone: &str) -> Self {
        Self::NotFound {
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::NotFound { name, phone } => AppError::reservation_not_found(name, phone),
            ManagerError::InvalidRoomNumber(number) => AppError::invalid_room_number(number),
            ManagerError::RoomOccupied(number) => AppError::room_occupied(number),
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
