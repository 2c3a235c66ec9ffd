use super::common::{desk_with_booking, desk_with_rooms, today};
use crate::desk::{Booking, DeskError, FrontDesk, HotelState, RoomType};
use crate::storage::InMemoryStore;

#[test]
fn booking_claims_the_room() {
    let store = InMemoryStore::new();
    let desk = desk_with_booking(&store);

    let room = desk.state().room("101").expect("room present");
    assert!(!room.available);
    assert!(desk.state().availability_consistent());
    assert_eq!(desk.bookings().len(), 1);
}

#[test]
fn zero_nights_is_invalid_input() {
    let store = InMemoryStore::new();
    let mut desk = desk_with_rooms(&store);

    let err = desk
        .create_booking("Alice", "", RoomType::Single, "101", 0, today())
        .expect_err("zero nights must fail");
    assert!(matches!(err, DeskError::InvalidInput(_)));
    assert!(desk.bookings().is_empty());
}

#[test]
fn booked_room_cannot_be_booked_again() {
    let store = InMemoryStore::new();
    let mut desk = desk_with_booking(&store);

    // 101 was the only single, so the type is exhausted.
    let err = desk
        .create_booking("Bob", "", RoomType::Single, "101", 1, today())
        .expect_err("double booking must fail");
    assert!(matches!(err, DeskError::NoAvailability(RoomType::Single)));
    assert_eq!(desk.bookings().len(), 1);
}

#[test]
fn selecting_a_room_outside_the_candidates_fails() {
    let store = InMemoryStore::new();
    let mut desk = desk_with_rooms(&store);

    // 999 is not a real room; 102 would be the wrong type.
    let err = desk
        .create_booking("Bob", "", RoomType::Single, "999", 1, today())
        .expect_err("unknown room must fail");
    assert!(matches!(err, DeskError::InvalidSelection(number) if number == "999"));
    assert!(desk.state().room("101").expect("room present").available);
    assert!(desk.bookings().is_empty());

    let err = desk
        .create_booking("Bob", "", RoomType::Single, "201", 1, today())
        .expect_err("type mismatch must fail");
    assert!(matches!(err, DeskError::InvalidSelection(_)));
}

#[test]
fn cancel_without_reference_removes_most_recent() {
    let store = InMemoryStore::new();
    let mut desk = desk_with_booking(&store);
    desk.create_booking("Bob", "", RoomType::Double, "201", 3, today())
        .expect("book 201 for Bob");

    let cancelled = desk.cancel_booking(None).expect("cancel succeeds");
    assert_eq!(cancelled.guest_name, "Bob");
    assert!(desk.state().room("201").expect("room present").available);
    assert_eq!(desk.bookings().len(), 1, "Alice's booking survives");
}

#[test]
fn cancel_by_room_number_picks_that_booking() {
    let store = InMemoryStore::new();
    let mut desk = desk_with_booking(&store);
    desk.create_booking("Bob", "", RoomType::Double, "201", 3, today())
        .expect("book 201 for Bob");

    let cancelled = desk.cancel_booking(Some("101")).expect("cancel succeeds");
    assert_eq!(cancelled.guest_name, "Alice");
    assert!(desk.state().room("101").expect("room present").available);
    assert!(!desk.state().room("201").expect("room present").available);
}

#[test]
fn cancel_with_unknown_reference_is_not_found() {
    let store = InMemoryStore::new();
    let mut desk = desk_with_booking(&store);

    let err = desk
        .cancel_booking(Some("201"))
        .expect_err("no booking for 201");
    assert!(matches!(err, DeskError::NotFound("booking")));
    assert_eq!(desk.bookings().len(), 1);
}

#[test]
fn cancel_on_empty_ledger_leaves_registry_untouched() {
    let store = InMemoryStore::new();
    let mut desk = desk_with_rooms(&store);

    let err = desk.cancel_booking(None).expect_err("nothing to cancel");
    assert!(matches!(err, DeskError::EmptyLedger));
    assert!(desk.state().rooms.iter().all(|room| room.available));
}

#[test]
#[should_panic(expected = "must reference a registered room")]
fn cancelling_a_booking_for_an_unregistered_room_trips_the_audit() {
    let store = InMemoryStore::new();
    // Corrupt record set: a booking points at a room the registry never had.
    let state = HotelState {
        bookings: vec![Booking {
            room_number: "999".to_string(),
            guest_name: "Ghost".to_string(),
            contact: String::new(),
            nights: 1,
            created_on: today(),
        }],
        ..HotelState::default()
    };
    let mut desk = FrontDesk::with_state(&store, state);

    let _ = desk.cancel_booking(None);
}

#[test]
fn failed_save_rolls_back_booking_and_availability_together() {
    let store = InMemoryStore::new();
    let mut desk = desk_with_rooms(&store);

    store.fail_next_save();
    let err = desk
        .create_booking("Alice", "", RoomType::Single, "101", 2, today())
        .expect_err("save failure surfaces");
    assert!(matches!(err, DeskError::Persistence(_)));

    // Neither half of the transaction may survive.
    assert!(desk.bookings().is_empty());
    assert!(desk.state().room("101").expect("room present").available);
    assert!(desk.state().availability_consistent());
}
