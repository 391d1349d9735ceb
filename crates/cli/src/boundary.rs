//! Request/response contract between the presentation layer and the wallet core.

use serde::Serialize;

use ledgerwallet_core::{DomainError, Identity};
use ledgerwallet_ledger::Ledger;
use ledgerwallet_wallet::{WalletResult, wallet_for};

/// One submission of the lookup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRequest {
    pub identity: String,
}

impl WalletRequest {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }
}

/// Outcome of a lookup. Invalid input and an unknown user are kept apart so
/// they are never rendered the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WalletResponse {
    Found {
        identity: Identity,
        wallet: WalletResult,
    },
    NoTransactions {
        identity: Identity,
    },
    Invalid {
        reason: String,
    },
}

impl WalletResponse {
    pub fn is_invalid(&self) -> bool {
        matches!(self, WalletResponse::Invalid { .. })
    }
}

impl From<DomainError> for WalletResponse {
    fn from(err: DomainError) -> Self {
        WalletResponse::Invalid {
            reason: err.to_string(),
        }
    }
}

/// Validate the request once, run the query and classify the result.
pub fn handle(ledger: &Ledger, request: &WalletRequest) -> WalletResponse {
    let identity = match Identity::parse(request.identity.as_str()) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(error = %err, "rejected wallet lookup");
            return err.into();
        }
    };

    let wallet = wallet_for(ledger, &identity);
    tracing::info!(
        identity = %identity,
        transfers = wallet.history.len(),
        balance = %wallet.balance,
        "wallet lookup"
    );

    if wallet.is_empty() {
        WalletResponse::NoTransactions { identity }
    } else {
        WalletResponse::Found { identity, wallet }
    }
}
