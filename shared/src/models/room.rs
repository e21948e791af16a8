//! Room Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest room number in the inventory
pub const FIRST_ROOM_NUMBER: i32 = 1;
/// Highest room number in the inventory
pub const LAST_ROOM_NUMBER: i32 = 10;

/// Room category, each with a fixed nightly rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    Standard,
    Double,
    JuniorSuite,
    Suite,
}

impl RoomCategory {
    /// Resolve a room number to its category
    ///
    /// Rooms 1-4 are Standard, 5-8 Double, 9 the Junior Suite and 10 the Suite.
    /// Any other number is not part of the inventory.
    pub fn for_room_number(number: i64) -> Option<Self> {
        match number {
            1..=4 => Some(Self::Standard),
            5..=8 => Some(Self::Double),
            9 => Some(Self::JuniorSuite),
            10 => Some(Self::Suite),
            _ => None,
        }
    }

    /// Nightly rate for this category
    pub fn nightly_rate(&self) -> Decimal {
        match self {
            Self::Standard => Decimal::new(200, 0),
            Self::Double => Decimal::new(250, 0),
            Self::JuniorSuite => Decimal::new(300, 0),
            Self::Suite => Decimal::new(400, 0),
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Double => "Double",
            Self::JuniorSuite => "Junior Suite",
            Self::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Room entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: i32,
    pub category: RoomCategory,
    #[serde(with = "rust_decimal::serde::float")]
    pub nightly_rate: Decimal,
    pub available: bool,
}

impl Room {
    /// Create an available room with the category's rate
    pub fn new(number: i32, category: RoomCategory) -> Self {
        Self {
            number,
            category,
            nightly_rate: category.nightly_rate(),
            available: true,
        }
    }

    /// Build a fresh room value for a room number, `None` if the number is
    /// outside the inventory
    pub fn from_number(number: i64) -> Option<Self> {
        let category = RoomCategory::for_room_number(number)?;
        let number = i32::try_from(number).ok()?;
        Some(Self::new(number, category))
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available { "Available" } else { "Occupied" }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room Number: {}, Type: {}, Availability: {}",
            self.number,
            self.category,
            self.availability_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_for_room_number() {
        for n in 1..=4 {
            assert_eq!(RoomCategory::for_room_number(n), Some(RoomCategory::Standard));
        }
        for n in 5..=8 {
            assert_eq!(RoomCategory::for_room_number(n), Some(RoomCategory::Double));
        }
        assert_eq!(RoomCategory::for_room_number(9), Some(RoomCategory::JuniorSuite));
        assert_eq!(RoomCategory::for_room_number(10), Some(RoomCategory::Suite));

        assert_eq!(RoomCategory::for_room_number(0), None);
        assert_eq!(RoomCategory::for_room_number(11), None);
        assert_eq!(RoomCategory::for_room_number(-3), None);
    }

    #[test]
    fn test_nightly_rates() {
        assert_eq!(RoomCategory::Standard.nightly_rate(), Decimal::from(200));
        assert_eq!(RoomCategory::Double.nightly_rate(), Decimal::from(250));
        assert_eq!(RoomCategory::JuniorSuite.nightly_rate(), Decimal::from(300));
        assert_eq!(RoomCategory::Suite.nightly_rate(), Decimal::from(400));
    }

    #[test]
    fn test_room_from_number() {
        let room = Room::from_number(7).unwrap();
        assert_eq!(room.number, 7);
        assert_eq!(room.category, RoomCategory::Double);
        assert_eq!(room.nightly_rate, Decimal::from(250));
        assert!(room.available);

        assert!(Room::from_number(11).is_none());
        assert!(Room::from_number(i64::MAX).is_none());
    }

    #[test]
    fn test_room_display() {
        let mut room = Room::new(9, RoomCategory::JuniorSuite);
        assert_eq!(
            room.to_string(),
            "Room Number: 9, Type: Junior Suite, Availability: Available"
        );

        room.available = false;
        assert_eq!(
            room.to_string(),
            "Room Number: 9, Type: Junior Suite, Availability: Occupied"
        );
    }

    #[test]
    fn test_room_rate_serializes_as_number() {
        let room = Room::new(5, RoomCategory::Double);
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["nightly_rate"], 250.0);
        assert!(json["nightly_rate"].is_number());

        let back: Room = serde_json::from_value(json).unwrap();
        assert_eq!(back, room);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&RoomCategory::JuniorSuite).unwrap();
        assert_eq!(json, "\"junior_suite\"");

        let category: RoomCategory = serde_json::from_str("\"suite\"").unwrap();
        assert_eq!(category, RoomCategory::Suite);
    }
}
