//! Room, booking, and billing lifecycle.
//!
//! The front desk owns the whole record set and the rules that move a room
//! between available and occupied: a booking claims a room, check-in turns
//! the booking into a stay, check-out prices the stay and frees the room,
//! and cancellation releases a claim early. Persistence happens through the
//! [`crate::storage::StateStore`] seam after every mutation.

pub mod domain;
pub mod service;
pub mod state;

#[cfg(test)]
mod tests;

pub use domain::{
    Bill, Booking, DeskError, Occupancy, ParseRoomTypeError, Room, RoomType, ServiceCharge,
    StayRef,
};
pub use service::FrontDesk;
pub use state::HotelState;
