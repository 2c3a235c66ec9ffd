use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

/// A monetary amount in integer cents.
///
/// All rates, service costs, and bill totals flow through this type so that
/// billing arithmetic stays exact; decimals only exist at the parse and
/// display boundaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Line total for a stay: nightly rate times number of nights.
    /// Saturates at the i64 bounds so an absurd rate cannot wrap a bill
    /// negative.
    pub const fn per_night(self, nights: u32) -> Self {
        Money(self.0.saturating_mul(nights as i64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        self.per_night(rhs)
    }
}

/// Error produced when a decimal string cannot be read as an amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid amount (expected e.g. 100, 99.5, or 120.00)")]
pub struct ParseMoneyError(String);

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Accepts plain integers and amounts with up to two fractional digits.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let err = || ParseMoneyError(value.to_string());

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        if whole.is_empty() || fraction.len() > 2 {
            return Err(err());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let major: i64 = whole.parse().map_err(|_| err())?;
        let minor: i64 = if fraction.is_empty() {
            0
        } else if fraction.len() == 1 {
            fraction.parse::<i64>().map_err(|_| err())? * 10
        } else {
            fraction.parse().map_err(|_| err())?
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(err)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}
