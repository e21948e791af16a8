//! Reservation Model

use super::guest::Guest;
use super::room::Room;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reservation entity: one guest holding one room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub guest: Guest,
    pub room: Room,
    /// Unix millis
    pub created_at: i64,
}

impl Reservation {
    pub fn room_number(&self) -> i32 {
        self.room.number
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guest: {}, Phone: {}, Room: {}",
            self.guest.name, self.guest.phone, self.room.number
        )
    }
}

/// Create reservation payload
///
/// The room number is kept wide so out-of-range input reaches validation
/// instead of failing earlier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub guest_name: String,
    pub guest_phone: String,
    pub room_number: i64,
}

impl ReservationCreate {
    pub fn new(guest_name: impl Into<String>, guest_phone: impl Into<String>, room_number: i64) -> Self {
        Self {
            guest_name: guest_name.into(),
            guest_phone: guest_phone.into(),
            room_number,
        }
    }
}

/// Update reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub guest_name: String,
    pub guest_phone: String,
    pub room_number: i64,
}

impl ReservationUpdate {
    pub fn new(guest_name: impl Into<String>, guest_phone: impl Into<String>, room_number: i64) -> Self {
        Self {
            guest_name: guest_name.into(),
            guest_phone: guest_phone.into(),
            room_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomCategory;

    #[test]
    fn test_reservation_display() {
        let reservation = Reservation {
            id: 1,
            guest: Guest::new(1, "Alice", "555-1111"),
            room: Room::new(3, RoomCategory::Standard),
            created_at: 0,
        };
        assert_eq!(
            reservation.to_string(),
            "Guest: Alice, Phone: 555-1111, Room: 3"
        );
        assert_eq!(reservation.room_number(), 3);
    }

    #[test]
    fn test_reservation_serialize() {
        let reservation = Reservation {
            id: 7,
            guest: Guest::new(2, "Bob", "000"),
            room: Room::new(10, RoomCategory::Suite),
            created_at: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["guest"]["name"], "Bob");
        assert_eq!(json["room"]["number"], 10);
        assert_eq!(json["room"]["category"], "suite");
        assert_eq!(json["room"]["nightly_rate"], 400.0);
    }
}
