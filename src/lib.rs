//! Front-desk record keeper for a single-property hotel.
//!
//! The crate tracks room inventory, guest bookings, active stays, ancillary
//! service charges, and issued bills. Commands run one at a time against an
//! explicit in-memory record set and persist through a pluggable storage
//! gateway before reporting success.

pub mod config;
pub mod desk;
pub mod error;
pub mod money;
pub mod storage;
pub mod telemetry;

pub use desk::{FrontDesk, HotelState};
pub use error::AppError;
pub use money::Money;
