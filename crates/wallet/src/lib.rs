//! Wallet aggregation over a ledger snapshot.
//!
//! Pure domain logic only: no IO, no logging, no shared state between queries.

pub mod query;

pub use query::{WalletResult, query_wallet, wallet_for};
