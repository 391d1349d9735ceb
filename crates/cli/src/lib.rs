//! Presentation boundary for the wallet: configuration, request handling and
//! console rendering. Owns no aggregation logic.

pub mod boundary;
pub mod config;
pub mod render;

pub use boundary::{WalletRequest, WalletResponse, handle};
pub use config::{Args, LedgerSource, OutputFormat};
