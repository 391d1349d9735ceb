use serde::{Deserialize, Serialize};

use ledgerwallet_core::{Balance, DomainResult, Identity, Total, accumulate, net};
use ledgerwallet_ledger::{Ledger, Transfer};

/// Derived view of one identity's activity on the ledger.
///
/// Recomputed on every query and owned by the caller; nothing is cached.
/// Totals serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletResult {
    /// Transfers where the identity is sender or recipient, in ledger order.
    pub history: Vec<Transfer>,
    #[serde(with = "rust_decimal::serde::float")]
    pub received: Total,
    #[serde(with = "rust_decimal::serde::float")]
    pub sent: Total,
    /// `received - sent`.
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Balance,
}

impl WalletResult {
    /// true when the identity never appears on the ledger.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// Composite accumulator for the single pass over the ledger.
#[derive(Debug, Default)]
struct Tally {
    history: Vec<Transfer>,
    received: Total,
    sent: Total,
}

impl Tally {
    fn record(mut self, identity: &Identity, transfer: &Transfer) -> Self {
        let inbound = transfer.recipient == *identity;
        let outbound = transfer.sender == *identity;

        if inbound {
            self.received = accumulate(self.received, transfer.amount);
        }
        if outbound {
            self.sent = accumulate(self.sent, transfer.amount);
        }
        // A self-transfer is both; it still shows up once.
        if inbound || outbound {
            self.history.push(transfer.clone());
        }
        self
    }

    fn finish(self) -> WalletResult {
        WalletResult {
            balance: net(self.received, self.sent),
            history: self.history,
            received: self.received,
            sent: self.sent,
        }
    }
}

/// Compute history and balance for an already-validated identity.
///
/// Pure: reads the snapshot once and touches nothing else.
pub fn wallet_for(ledger: &Ledger, identity: &Identity) -> WalletResult {
    ledger
        .all_transfers()
        .fold(Tally::default(), |tally, transfer| tally.record(identity, transfer))
        .finish()
}

/// Validate `identity` and compute its wallet.
///
/// Fails only with `DomainError::InvalidIdentity` on empty input. An identity
/// with no transfers yields an empty result, not an error.
pub fn query_wallet(ledger: &Ledger, identity: &str) -> DomainResult<WalletResult> {
    let identity = Identity::parse(identity)?;
    Ok(wallet_for(ledger, &identity))
}
