use crate::desk::{FrontDesk, RoomType, StayRef};
use crate::money::Money;
use crate::storage::InMemoryStore;
use chrono::NaiveDate;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn money(text: &str) -> Money {
    text.parse().expect("valid amount")
}

pub(super) fn desk(store: &InMemoryStore) -> FrontDesk<&InMemoryStore> {
    FrontDesk::open(store).expect("empty store loads")
}

/// Desk with room 101 (single, $100.00/night) and room 201 (double,
/// $150.00/night), both free.
pub(super) fn desk_with_rooms(store: &InMemoryStore) -> FrontDesk<&InMemoryStore> {
    let mut desk = desk(store);
    desk.register_room("101", RoomType::Single, money("100.0"))
        .expect("register 101");
    desk.register_room("201", RoomType::Double, money("150.0"))
        .expect("register 201");
    desk
}

/// Desk where Alice booked room 101 for two nights.
pub(super) fn desk_with_booking(store: &InMemoryStore) -> FrontDesk<&InMemoryStore> {
    let mut desk = desk_with_rooms(store);
    desk.create_booking(
        "Alice",
        "alice@example.com",
        RoomType::Single,
        "101",
        2,
        today(),
    )
    .expect("book 101 for Alice");
    desk
}

/// Desk where Alice is checked into room 101.
pub(super) fn desk_with_stay(store: &InMemoryStore) -> FrontDesk<&InMemoryStore> {
    let mut desk = desk_with_booking(store);
    desk.check_in(&StayRef::Guest("Alice".to_string()), today())
        .expect("check Alice in");
    desk
}
