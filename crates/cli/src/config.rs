//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use ledgerwallet_ledger::{Ledger, LoadError};

/// Snapshot shipped with the binary, used when no ledger path is configured.
pub const BUNDLED_LEDGER: &str = include_str!("../assets/ledger.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Show a user's balance and transaction history from a ledger snapshot.
#[derive(Debug, Clone, Parser)]
#[command(name = "ledgerwallet", version)]
pub struct Args {
    /// Username to look up (required, non-empty).
    pub identity: String,

    /// Ledger snapshot (JSON chain dump or array of blocks).
    #[arg(long, env = "LEDGERWALLET_LEDGER")]
    pub ledger: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Where the ledger snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerSource {
    Bundled,
    File(PathBuf),
}

impl Args {
    pub fn ledger_source(&self) -> LedgerSource {
        match &self.ledger {
            Some(path) => LedgerSource::File(path.clone()),
            None => LedgerSource::Bundled,
        }
    }
}

impl LedgerSource {
    pub fn load(&self) -> Result<Ledger, LoadError> {
        match self {
            LedgerSource::Bundled => {
                tracing::info!("no ledger path configured; using bundled snapshot");
                Ledger::from_json_str(BUNDLED_LEDGER)
            }
            LedgerSource::File(path) => {
                tracing::info!(path = %path.display(), "loading ledger snapshot");
                Ledger::from_path(path)
            }
        }
    }
}
