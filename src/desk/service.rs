use super::domain::{
    Bill, Booking, DeskError, Occupancy, Room, RoomType, ServiceCharge, StayRef,
};
use super::state::HotelState;
use crate::money::Money;
use crate::storage::StateStore;
use chrono::NaiveDate;
use tracing::info;

/// The front desk: every command enters here, mutates the in-memory record
/// set, and persists through the storage gateway before reporting success.
///
/// Mutating operations are atomic from the caller's perspective: the state
/// is snapshotted up front and restored if the save fails, so the ledgers
/// and the room registry never diverge.
pub struct FrontDesk<S> {
    state: HotelState,
    store: S,
}

impl<S: StateStore> FrontDesk<S> {
    /// Load the record set from the store. A load failure here is the one
    /// error the process is allowed to die on — operating on an unknown
    /// record set is worse than not operating.
    pub fn open(store: S) -> Result<Self, DeskError> {
        let state = store.load()?;
        Ok(Self { state, store })
    }

    pub fn with_state(store: S, state: HotelState) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> &HotelState {
        &self.state
    }

    fn commit(&mut self, before: HotelState) -> Result<(), DeskError> {
        if let Err(err) = self.store.save(&self.state) {
            self.state = before;
            return Err(err.into());
        }
        debug_assert!(self.state.availability_consistent());
        Ok(())
    }

    // ── Room registry ────────────────────────────────────────────

    pub fn register_room(
        &mut self,
        number: &str,
        kind: RoomType,
        rate: Money,
    ) -> Result<&Room, DeskError> {
        let number = number.trim();
        if number.is_empty() {
            return Err(DeskError::InvalidInput("room number is required".to_string()));
        }
        if rate.is_negative() {
            return Err(DeskError::InvalidInput(
                "nightly rate must not be negative".to_string(),
            ));
        }
        if self.state.room(number).is_some() {
            return Err(DeskError::DuplicateKey(number.to_string()));
        }

        let before = self.state.clone();
        self.state.rooms.push(Room {
            number: number.to_string(),
            kind,
            rate,
            available: true,
        });
        self.commit(before)?;

        info!(room = number, %kind, %rate, "room registered");
        Ok(self.state.rooms.last().expect("room just appended"))
    }

    pub fn rooms(&self) -> &[Room] {
        info!(count = self.state.rooms.len(), "room list requested");
        &self.state.rooms
    }

    // ── Booking ledger ───────────────────────────────────────────

    pub fn create_booking(
        &mut self,
        guest_name: &str,
        contact: &str,
        kind: RoomType,
        room_number: &str,
        nights: u32,
        on: NaiveDate,
    ) -> Result<&Booking, DeskError> {
        let guest_name = guest_name.trim();
        if guest_name.is_empty() {
            return Err(DeskError::InvalidInput("guest name is required".to_string()));
        }
        if nights == 0 {
            return Err(DeskError::InvalidInput(
                "duration must be at least 1 night".to_string(),
            ));
        }

        let candidates = self.state.available_rooms(kind);
        if candidates.is_empty() {
            return Err(DeskError::NoAvailability(kind));
        }
        // The chosen room must be one of the free rooms of the requested
        // type; this is what keeps an occupied room from being double-booked.
        if !candidates.iter().any(|room| room.number == room_number) {
            return Err(DeskError::InvalidSelection(room_number.to_string()));
        }

        let before = self.state.clone();
        self.state.bookings.push(Booking {
            room_number: room_number.to_string(),
            guest_name: guest_name.to_string(),
            contact: contact.trim().to_string(),
            nights,
            created_on: on,
        });
        let flipped = self.state.set_availability(room_number, false);
        debug_assert!(flipped, "booked room must exist in the registry");
        self.commit(before)?;

        info!(room = room_number, guest = guest_name, nights, "room booked");
        Ok(self.state.bookings.last().expect("booking just appended"))
    }

    pub fn bookings(&self) -> &[Booking] {
        info!(count = self.state.bookings.len(), "booking list requested");
        &self.state.bookings
    }

    /// Cancel a booking and free its room. An explicit room number picks the
    /// booking to cancel; without one the most recently created booking goes,
    /// matching the behavior the paper ledger had.
    pub fn cancel_booking(&mut self, room_number: Option<&str>) -> Result<Booking, DeskError> {
        if self.state.bookings.is_empty() {
            return Err(DeskError::EmptyLedger);
        }

        let index = match room_number {
            Some(number) => self
                .state
                .bookings
                .iter()
                .position(|booking| booking.room_number == number)
                .ok_or(DeskError::NotFound("booking"))?,
            None => self.state.bookings.len() - 1,
        };

        let before = self.state.clone();
        let booking = self.state.bookings.remove(index);
        let flipped = self.state.set_availability(&booking.room_number, true);
        debug_assert!(flipped, "cancelled booking must reference a registered room");
        self.commit(before)?;

        info!(
            room = %booking.room_number,
            guest = %booking.guest_name,
            "booking cancelled"
        );
        Ok(booking)
    }

    // ── Occupancy tracker ────────────────────────────────────────

    /// Fulfill a booking: the matching ledger entry is consumed and becomes
    /// an active stay. Duration travels with the stay so the eventual bill
    /// does not depend on the removed booking.
    pub fn check_in(&mut self, reference: &StayRef, on: NaiveDate) -> Result<&Occupancy, DeskError> {
        let index = self
            .state
            .bookings
            .iter()
            .position(|booking| match reference {
                StayRef::Guest(name) => booking.guest_name == *name,
                StayRef::Room(number) => booking.room_number == *number,
            })
            .ok_or(DeskError::NotFound("booking"))?;

        // Unreachable while the availability invariant holds, but a stale
        // record set must not produce two stays in one room.
        let room_number = self.state.bookings[index].room_number.clone();
        if self.state.occupancy(&room_number).is_some() {
            return Err(DeskError::AlreadyOccupied(room_number));
        }

        let before = self.state.clone();
        let booking = self.state.bookings.remove(index);
        self.state.occupancies.push(Occupancy {
            room_number: booking.room_number.clone(),
            guest_name: booking.guest_name.clone(),
            nights: booking.nights,
            checked_in_on: on,
        });
        self.commit(before)?;

        info!(room = %booking.room_number, guest = %booking.guest_name, "guest checked in");
        Ok(self.state.occupancies.last().expect("stay just appended"))
    }

    /// Close a stay: compute the bill, retire the stay's service entries,
    /// free the room, and record the bill under the guest's name (a later
    /// check-out for the same guest overwrites the earlier bill).
    pub fn check_out(&mut self, reference: &StayRef, on: NaiveDate) -> Result<Bill, DeskError> {
        let index = self
            .state
            .occupancies
            .iter()
            .position(|stay| match reference {
                StayRef::Guest(name) => stay.guest_name == *name,
                StayRef::Room(number) => stay.room_number == *number,
            })
            .ok_or(DeskError::NotFound("check-in record"))?;

        let stay = self.state.occupancies[index].clone();
        let rate = self
            .state
            .room(&stay.room_number)
            .ok_or(DeskError::NotFound("room"))?
            .rate;

        let room_charge = rate.per_night(stay.nights);
        let service_charge: Money = self
            .state
            .services_for(&stay.room_number)
            .map(|entry| entry.cost)
            .sum();
        let bill = Bill {
            guest_name: stay.guest_name.clone(),
            room_charge,
            service_charge,
            total: room_charge + service_charge,
            issued_on: on,
        };

        let before = self.state.clone();
        self.state.occupancies.remove(index);
        self.state
            .services
            .retain(|entry| entry.room_number != stay.room_number);
        let flipped = self.state.set_availability(&stay.room_number, true);
        debug_assert!(flipped, "closed stay must reference a registered room");
        match self
            .state
            .bills
            .iter_mut()
            .find(|existing| existing.guest_name == bill.guest_name)
        {
            Some(existing) => *existing = bill.clone(),
            None => self.state.bills.push(bill.clone()),
        }
        self.commit(before)?;

        info!(
            room = %stay.room_number,
            guest = %stay.guest_name,
            total = %bill.total,
            "guest checked out"
        );
        Ok(bill)
    }

    // ── Service ledger ───────────────────────────────────────────

    pub fn add_service(
        &mut self,
        room_number: &str,
        description: &str,
        cost: Money,
    ) -> Result<&ServiceCharge, DeskError> {
        if cost.is_negative() {
            return Err(DeskError::InvalidInput(
                "service cost must not be negative".to_string(),
            ));
        }
        if self.state.room(room_number).is_none() {
            return Err(DeskError::NotFound("room"));
        }
        if self.state.occupancy(room_number).is_none() {
            return Err(DeskError::RoomNotOccupied(room_number.to_string()));
        }

        let before = self.state.clone();
        self.state.services.push(ServiceCharge {
            room_number: room_number.to_string(),
            description: description.trim().to_string(),
            cost,
        });
        self.commit(before)?;

        info!(room = room_number, service = description, %cost, "service added");
        Ok(self.state.services.last().expect("service just appended"))
    }

    pub fn services(&self) -> &[ServiceCharge] {
        info!(count = self.state.services.len(), "service list requested");
        &self.state.services
    }

    pub fn services_for<'a>(&'a self, room_number: &'a str) -> Vec<&'a ServiceCharge> {
        self.state.services_for(room_number).collect()
    }

    // ── Billing engine ───────────────────────────────────────────

    pub fn bills(&self) -> &[Bill] {
        info!(count = self.state.bills.len(), "bill list requested");
        &self.state.bills
    }
}
