//! `ledgerwallet-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::Identity;
pub use rust_decimal::Decimal;
pub use value_object::{Amount, Balance, Total, ValueObject, accumulate, net};
