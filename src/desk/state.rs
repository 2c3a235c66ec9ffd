use super::domain::{Bill, Booking, Occupancy, Room, RoomType, ServiceCharge};
use serde::{Deserialize, Serialize};

/// The full record set: rooms, open bookings, active stays, ancillary
/// charges, and issued bills.
///
/// One instance of this container is loaded from the persistence gateway at
/// startup and threaded through every operation — there is no other copy of
/// the records and no global state. Collections keep insertion order so
/// listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelState {
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    pub occupancies: Vec<Occupancy>,
    pub services: Vec<ServiceCharge>,
    pub bills: Vec<Bill>,
}

impl HotelState {
    pub fn room(&self, number: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    /// The only mutator of the availability flag. Callers are the
    /// booking/occupancy transitions in the service layer; nothing else may
    /// flip a room between available and occupied.
    pub(super) fn set_availability(&mut self, number: &str, available: bool) -> bool {
        match self.rooms.iter_mut().find(|room| room.number == number) {
            Some(room) => {
                room.available = available;
                true
            }
            None => false,
        }
    }

    pub fn available_rooms(&self, kind: RoomType) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.kind == kind && room.available)
            .collect()
    }

    pub fn occupancy(&self, room_number: &str) -> Option<&Occupancy> {
        self.occupancies
            .iter()
            .find(|stay| stay.room_number == room_number)
    }

    pub fn services_for<'a>(
        &'a self,
        room_number: &'a str,
    ) -> impl Iterator<Item = &'a ServiceCharge> + 'a {
        self.services
            .iter()
            .filter(move |entry| entry.room_number == room_number)
    }

    /// True when every room's availability flag agrees with the booking and
    /// occupancy ledgers: a room is unavailable exactly when one of them
    /// references it. Listings and tests use this to audit the core
    /// invariant after each command.
    pub fn availability_consistent(&self) -> bool {
        self.rooms.iter().all(|room| {
            let claimed = self
                .bookings
                .iter()
                .any(|booking| booking.room_number == room.number)
                || self
                    .occupancies
                    .iter()
                    .any(|stay| stay.room_number == room.number);
            room.available != claimed
        })
    }
}
