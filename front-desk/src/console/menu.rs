//! Main menu

/// Menu options in display order
pub const MENU_LINES: [&str; 6] = [
    "1. Add Reservation",
    "2. Cancel Reservation",
    "3. Update Reservation",
    "4. Show All Reservations",
    "5. Display Available Rooms",
    "6. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddReservation,
    CancelReservation,
    UpdateReservation,
    ShowReservations,
    ShowAvailableRooms,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::AddReservation),
            2 => Some(Self::CancelReservation),
            3 => Some(Self::UpdateReservation),
            4 => Some(Self::ShowReservations),
            5 => Some(Self::ShowAvailableRooms),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}
