//! Reservation bookkeeping
//!
//! - [`ReservationManager`] - inventory + active reservations
//! - [`ManagerError`] - recoverable outcomes of manager operations

pub mod inventory;
pub mod manager;

pub use manager::{ManagerError, ManagerResult, ReservationManager};
