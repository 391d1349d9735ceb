//! Ledger store: immutable snapshot of blocks and their transfers.
//!
//! Pure data plus read-only access: no hashing, no integrity checks, no mutation.

pub mod ledger;
pub mod loader;

pub use ledger::{Block, Ledger, PreviousHash, Transfer};
pub use loader::LoadError;
