use crate::money::Money;
use crate::storage::StoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Single, Self::Double, Self::Suite]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Suite => "suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a room type (expected single, double, or suite)")]
pub struct ParseRoomTypeError(String);

impl FromStr for RoomType {
    type Err = ParseRoomTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "suite" => Ok(Self::Suite),
            _ => Err(ParseRoomTypeError(value.to_string())),
        }
    }
}

/// A registered room. `available` is owned by the state container and only
/// flips as a side effect of booking/occupancy transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: String,
    pub kind: RoomType,
    pub rate: Money,
    pub available: bool,
}

/// A reservation that has not yet been fulfilled by a check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub room_number: String,
    pub guest_name: String,
    pub contact: String,
    pub nights: u32,
    pub created_on: NaiveDate,
}

/// An active stay. `nights` is copied from the consumed booking at check-in
/// so the bill never depends on a ledger entry that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub room_number: String,
    pub guest_name: String,
    pub nights: u32,
    pub checked_in_on: NaiveDate,
}

/// Append-only ancillary charge against an occupied room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCharge {
    pub room_number: String,
    pub description: String,
    pub cost: Money,
}

/// The immutable charge summary issued at check-out, keyed by guest name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub guest_name: String,
    pub room_charge: Money,
    pub service_charge: Money,
    pub total: Money,
    pub issued_on: NaiveDate,
}

/// Check-in and check-out accept either lookup key; the guest-initiated and
/// room-initiated flows are both supported entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StayRef {
    Guest(String),
    Room(String),
}

impl fmt::Display for StayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StayRef::Guest(name) => write!(f, "guest '{name}'"),
            StayRef::Room(number) => write!(f, "room {number}"),
        }
    }
}

/// Domain failures. All are recovered at the command boundary and leave the
/// record set unchanged; only a persistence failure during startup load is
/// fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no {0} found matching the request")]
    NotFound(&'static str),
    #[error("room {0} is already registered")]
    DuplicateKey(String),
    #[error("no available {0} rooms")]
    NoAvailability(RoomType),
    #[error("room {0} is not an available room of the requested type")]
    InvalidSelection(String),
    #[error("room {0} already has a guest checked in")]
    AlreadyOccupied(String),
    #[error("room {0} has no guest checked in")]
    RoomNotOccupied(String),
    #[error("there are no bookings to cancel")]
    EmptyLedger,
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
}
