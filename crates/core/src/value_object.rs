//! Value object trait and the numeric value types used by the ledger.
//!
//! Value objects have **no identity**: two transfers with the same sender,
//! recipient and amount are equal. They are immutable once created.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::DomainError;

/// Sum of many amounts.
pub type Total = Decimal;

/// Net position of an identity (`received - sent`); may be negative.
pub type Balance = Decimal;

/// Quantity moved by a single transfer. Fractional values are allowed.
///
/// Always `>= 0`; construction and deserialization reject negative values.
/// Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_amount(format!(
                "amount must not be negative (got {value})"
            )));
        }
        if value.is_zero() {
            return Ok(Self::ZERO);
        }
        Ok(Self(value))
    }

    /// Get the underlying decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(Decimal::from(value))
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s)
            .map_err(|e| DomainError::invalid_amount(format!("{s:?}: {e}")))?;
        Self::new(value)
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0.normalize(), f)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

/// Marker trait for value objects.
///
/// Requires `Clone`, `PartialEq` and `Debug` so values can be copied, compared
/// and logged freely.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Transfer { sender: Identity, recipient: Identity, amount: Amount }
///
/// impl ValueObject for Transfer {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

impl ValueObject for Amount {}

/// Add an amount to a running total, saturating at the decimal range.
pub fn accumulate(total: Total, amount: Amount) -> Total {
    total.saturating_add(amount.value())
}

/// Net of two totals as a signed balance.
///
/// Saturates at the decimal range instead of overflowing.
pub fn net(received: Total, sent: Total) -> Balance {
    received.saturating_sub(sent)
}
