use super::*;
use shared::models::RoomCategory;


fn create_test_manager() -> ReservationManager {
    ReservationManager::new()
}

fn book(manager: &mut ReservationManager, name: &str, phone: &str, room_number: i64) -> Reservation {
    manager
        .add_reservation(ReservationCreate::new(name, phone, room_number))
        .expect("booking should succeed")
}

fn available_numbers(manager: &ReservationManager) -> Vec<i32> {
    manager
        .list_available_rooms()
        .iter()
        .map(|r| r.number)
        .collect()
}

/// Every inventory flag agrees with the reservation list
fn assert_inventory_consistent(manager: &ReservationManager) {
    for room in manager.rooms() {
        let holders = manager
            .list_reservations()
            .iter()
            .filter(|r| r.room.number == room.number)
            .count();
        assert!(holders <= 1, "room {} held {} times", room.number, holders);
        assert_eq!(
            room.available,
            holders == 0,
            "room {} availability out of step",
            room.number
        );
    }
}
