//! ReservationManager - room inventory and reservation bookkeeping
//!
//! The manager owns both the fixed room inventory and the list of active
//! reservations. Every mutation keeps the two in step: a room is flagged
//! unavailable exactly while one active reservation holds it.
//!
//! # Operation Flow
//!
//! ```text
//! add_reservation(req)
//!     ├─ 1. Resolve room number -> category (InvalidRoomNumber)
//!     ├─ 2. Reject a room already held (RoomOccupied)
//!     ├─ 3. Assign guest id + reservation id
//!     ├─ 4. Append reservation
//!     └─ 5. Flag inventory room unavailable
//!
//! update_reservation(name, phone, req)
//!     ├─ 1. Find by (name, phone) (NotFound)
//!     ├─ 2. Validate new room (InvalidRoomNumber / RoomOccupied)
//!     ├─ 3. Release old room, occupy new room
//!     └─ 4. Rewrite guest name/phone, substitute fresh room value
//! ```

mod error;
pub use error::*;

use super::inventory;
use shared::models::{Guest, Reservation, ReservationCreate, ReservationUpdate, Room};
use shared::util::now_millis;
use tracing::{debug, info, warn};

/// Owns the room inventory and the active reservations
#[derive(Debug, Clone)]
pub struct ReservationManager {
    rooms: Vec<Room>,
    /// Active reservations in insertion order
    reservations: Vec<Reservation>,
    next_guest_id: i64,
    next_reservation_id: i64,
}

impl ReservationManager {
    /// Create a manager with the full inventory available and no reservations
    pub fn new() -> Self {
        let rooms = inventory::initial_rooms();
        info!(room_count = rooms.len(), "ReservationManager initialized");
        Self {
            rooms,
            reservations: Vec::new(),
            next_guest_id: 1,
            next_reservation_id: 1,
        }
    }

    /// Full inventory in room-number order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up an inventory room by number
    #[cfg(test)]
    pub fn room(&self, number: i32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    /// Book a room for a new guest
    pub fn add_reservation(&mut self, req: ReservationCreate) -> ManagerResult<Reservation> {
        let mut room = Room::from_number(req.room_number).ok_or_else(|| {
            warn!(room_number = req.room_number, "Add rejected: invalid room number");
            ManagerError::InvalidRoomNumber(req.room_number)
        })?;

        if self.holder_of(room.number).is_some() {
            warn!(room_number = room.number, "Add rejected: room occupied");
            return Err(ManagerError::RoomOccupied(room.number));
        }

        let guest = Guest::new(self.next_guest_id, req.guest_name, req.guest_phone);
        self.next_guest_id += 1;

        room.available = false;
        let reservation = Reservation {
            id: self.next_reservation_id,
            guest,
            room,
            created_at: now_millis(),
        };
        self.next_reservation_id += 1;

        self.set_availability(reservation.room.number, false);
        self.reservations.push(reservation.clone());

        info!(
            reservation_id = reservation.id,
            guest_id = reservation.guest.id,
            room_number = reservation.room.number,
            "Reservation added"
        );
        Ok(reservation)
    }

    /// First reservation whose guest matches (name, phone) exactly
    pub fn find_reservation(&self, name: &str, phone: &str) -> Option<&Reservation> {
        let found = self.reservations.iter().find(|r| r.guest.matches(name, phone));
        debug!(guest_name = %name, found = found.is_some(), "Reservation lookup");
        found
    }

    /// Remove the guest's reservation and free its room
    pub fn cancel_reservation(&mut self, name: &str, phone: &str) -> ManagerResult<Reservation> {
        let index = self.position_of(name, phone).ok_or_else(|| {
            warn!(guest_name = %name, "Cancel rejected: reservation not found");
            ManagerError::not_found(name, phone)
        })?;

        let reservation = self.reservations.remove(index);
        self.set_availability(reservation.room.number, true);

        info!(
            reservation_id = reservation.id,
            room_number = reservation.room.number,
            "Reservation cancelled"
        );
        Ok(reservation)
    }

    /// Rewrite the guest details and move the reservation to another room
    ///
    /// The request is validated before anything changes, so a rejected update
    /// leaves the reservation exactly as it was.
    pub fn update_reservation(
        &mut self,
        name: &str,
        phone: &str,
        req: ReservationUpdate,
    ) -> ManagerResult<Reservation> {
        let index = self.position_of(name, phone).ok_or_else(|| {
            warn!(guest_name = %name, "Update rejected: reservation not found");
            ManagerError::not_found(name, phone)
        })?;

        let mut room = Room::from_number(req.room_number).ok_or_else(|| {
            warn!(room_number = req.room_number, "Update rejected: invalid room number");
            ManagerError::InvalidRoomNumber(req.room_number)
        })?;

        if let Some(holder) = self.holder_of(room.number)
            && holder != index
        {
            warn!(room_number = room.number, "Update rejected: room occupied");
            return Err(ManagerError::RoomOccupied(room.number));
        }

        let old_number = self.reservations[index].room.number;
        self.set_availability(old_number, true);
        self.set_availability(room.number, false);
        room.available = false;

        let reservation = &mut self.reservations[index];
        reservation.guest.name = req.guest_name;
        reservation.guest.phone = req.guest_phone;
        reservation.room = room;

        info!(
            reservation_id = reservation.id,
            from_room = old_number,
            to_room = reservation.room.number,
            "Reservation updated"
        );
        Ok(reservation.clone())
    }

    /// Snapshot of active reservations in insertion order
    pub fn list_reservations(&self) -> Vec<Reservation> {
        self.reservations.clone()
    }

    /// Snapshot of available rooms in room-number order
    pub fn list_available_rooms(&self) -> Vec<Room> {
        self.rooms.iter().filter(|r| r.available).cloned().collect()
    }

    fn position_of(&self, name: &str, phone: &str) -> Option<usize> {
        self.reservations
            .iter()
            .position(|r| r.guest.matches(name, phone))
    }

    /// Index of the reservation currently holding a room
    fn holder_of(&self, room_number: i32) -> Option<usize> {
        self.reservations
            .iter()
            .position(|r| r.room.number == room_number)
    }

    fn set_availability(&mut self, room_number: i32, available: bool) {
        if let Some(room) = self.rooms.iter_mut().find(|r| r.number == room_number) {
            room.available = available;
        }
    }
}

impl Default for ReservationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
