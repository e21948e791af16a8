//! Fixed room inventory

use shared::models::room::{FIRST_ROOM_NUMBER, LAST_ROOM_NUMBER};
use shared::models::{Room, RoomCategory};

/// Build the hotel's rooms, all available, ordered by room number
pub fn initial_rooms() -> Vec<Room> {
    (FIRST_ROOM_NUMBER..=LAST_ROOM_NUMBER)
        .filter_map(|number| {
            RoomCategory::for_room_number(i64::from(number))
                .map(|category| Room::new(number, category))
        })
        .collect()
}
