//! Console interaction layer
//!
//! Menu loop and prompts around [`ReservationManager`]. All reading and
//! writing happens here; the manager only ever sees parsed values.
//! Input and output are generic so whole sessions can be scripted.

pub mod menu;
pub mod prompt;

use crate::reservations::{ManagerError, ReservationManager};
use menu::{MENU_LINES, MenuChoice};
use prompt::{ask_int, ask_line, read_int};
use shared::error::AppError;
use shared::models::{ReservationCreate, ReservationUpdate};
use std::io::{self, BufRead, Write};

pub const MSG_ADDED: &str = "Reservation added successfully.";
pub const MSG_CANCELLED: &str = "Reservation cancelled successfully.";
pub const MSG_UPDATED: &str = "Reservation updated successfully.";
pub const MSG_NOT_FOUND: &str = "Reservation not found.";
pub const MSG_NO_RESERVATIONS: &str = "No reservations found.";
pub const MSG_INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const MSG_EXIT: &str = "Exiting program...";

/// Outcome of one menu action
enum Flow {
    Continue,
    Stop,
}

/// Interactive front desk session
pub struct Console<R, W> {
    input: R,
    output: W,
    manager: ReservationManager,
    hotel_name: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, manager: ReservationManager, hotel_name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            manager,
            hotel_name: hotel_name.into(),
        }
    }

    pub fn manager(&self) -> &ReservationManager {
        &self.manager
    }

    /// Consume the session, returning the manager and the output sink
    pub fn into_parts(self) -> (ReservationManager, W) {
        (self.manager, self.output)
    }

    /// Run the menu loop until the operator exits or input runs out
    pub fn run(&mut self) -> io::Result<()> {
        self.print_welcome()?;

        loop {
            self.print_menu()?;
            let Some(number) = read_int(&mut self.input, &mut self.output)? else {
                break;
            };

            let flow = match MenuChoice::from_number(number) {
                Some(choice) => self.handle(choice)?,
                None => {
                    writeln!(self.output, "{}", MSG_INVALID_CHOICE)?;
                    Flow::Continue
                }
            };
            if let Flow::Stop = flow {
                break;
            }
        }

        writeln!(self.output, "{}", MSG_EXIT)?;
        self.output.flush()
    }

    fn handle(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        tracing::debug!(?choice, "Menu choice");
        match choice {
            MenuChoice::AddReservation => self.add_reservation(),
            MenuChoice::CancelReservation => self.cancel_reservation(),
            MenuChoice::UpdateReservation => self.update_reservation(),
            MenuChoice::ShowReservations => {
                self.show_reservations()?;
                Ok(Flow::Continue)
            }
            MenuChoice::ShowAvailableRooms => {
                self.show_available_rooms()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Stop),
        }
    }

    fn print_welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to {} Reservation System!", self.hotel_name)?;
        writeln!(self.output, "{}", "-".repeat(50))
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Choose an option:")?;
        for line in MENU_LINES {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Ask for the (name, phone) lookup key
    fn ask_guest(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(name) = ask_line(&mut self.input, &mut self.output, "Enter guest name:")? else {
            return Ok(None);
        };
        let Some(phone) =
            ask_line(&mut self.input, &mut self.output, "Enter guest phone number:")?
        else {
            return Ok(None);
        };
        Ok(Some((name, phone)))
    }

    fn add_reservation(&mut self) -> io::Result<Flow> {
        let Some((name, phone)) = self.ask_guest()? else {
            return Ok(Flow::Stop);
        };
        let Some(room_number) = ask_int(&mut self.input, &mut self.output, "Enter room number:")?
        else {
            return Ok(Flow::Stop);
        };

        match self
            .manager
            .add_reservation(ReservationCreate::new(name, phone, room_number))
        {
            Ok(_) => writeln!(self.output, "{}", MSG_ADDED)?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn cancel_reservation(&mut self) -> io::Result<Flow> {
        let Some((name, phone)) = self.ask_guest()? else {
            return Ok(Flow::Stop);
        };

        match self.manager.cancel_reservation(&name, &phone) {
            Ok(_) => writeln!(self.output, "{}", MSG_CANCELLED)?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_reservation(&mut self) -> io::Result<Flow> {
        let Some((name, phone)) = self.ask_guest()? else {
            return Ok(Flow::Stop);
        };

        // Don't collect new details for a guest we can't find
        if self.manager.find_reservation(&name, &phone).is_none() {
            writeln!(self.output, "{}", MSG_NOT_FOUND)?;
            return Ok(Flow::Continue);
        }

        let Some(new_name) = ask_line(&mut self.input, &mut self.output, "Enter new guest name:")?
        else {
            return Ok(Flow::Stop);
        };
        let Some(new_phone) = ask_line(
            &mut self.input,
            &mut self.output,
            "Enter new guest phone number:",
        )?
        else {
            return Ok(Flow::Stop);
        };
        let Some(room_number) =
            ask_int(&mut self.input, &mut self.output, "Enter new room number:")?
        else {
            return Ok(Flow::Stop);
        };

        let update = ReservationUpdate::new(new_name, new_phone, room_number);
        match self.manager.update_reservation(&name, &phone, update) {
            Ok(_) => writeln!(self.output, "{}", MSG_UPDATED)?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_reservations(&mut self) -> io::Result<()> {
        let reservations = self.manager.list_reservations();
        if reservations.is_empty() {
            return writeln!(self.output, "{}", MSG_NO_RESERVATIONS);
        }
        writeln!(self.output, "All Reservations:")?;
        for reservation in &reservations {
            writeln!(self.output, "{}", reservation)?;
        }
        Ok(())
    }

    fn show_available_rooms(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available Rooms:")?;
        for room in self.manager.list_available_rooms() {
            writeln!(self.output, "{}", room)?;
        }
        Ok(())
    }

    fn report(&mut self, err: ManagerError) -> io::Result<()> {
        let err = AppError::from(err);
        tracing::info!(code = %err.code, details = ?err.details, "Operation rejected");
        writeln!(self.output, "{}", err.message)
    }
}
