//! Console rendering of wallet responses.

use ledgerwallet_core::Identity;
use ledgerwallet_ledger::{Ledger, Transfer};

use crate::boundary::WalletResponse;
use crate::config::OutputFormat;

pub fn render(response: &WalletResponse, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(response)),
        OutputFormat::Json => serde_json::to_string_pretty(response),
    }
}

pub fn render_text(response: &WalletResponse) -> String {
    match response {
        WalletResponse::Found { identity, wallet } => {
            let mut out = format!(
                "Wallet: {identity}\nBalance: {}\nReceived: {}  Sent: {}\nHistory ({} transfers):\n",
                wallet.balance.normalize(),
                wallet.received.normalize(),
                wallet.sent.normalize(),
                wallet.history.len()
            );
            for transfer in &wallet.history {
                out.push_str("  ");
                out.push_str(&history_line(identity, transfer));
                out.push('\n');
            }
            out
        }
        WalletResponse::NoTransactions { identity } => {
            format!("Wallet: {identity}\nNo transactions found.\nBalance: 0\n")
        }
        WalletResponse::Invalid { reason } => {
            format!("You need to enter an existing username ({reason}).\n")
        }
    }
}

/// One history row, signed from the point of view of `owner`.
fn history_line(owner: &Identity, transfer: &Transfer) -> String {
    let sign = if transfer.is_self_transfer() {
        "±"
    } else if transfer.recipient == *owner {
        "+"
    } else {
        "-"
    };
    format!(
        "{} -> {}  {}{}",
        transfer.sender, transfer.recipient, sign, transfer.amount
    )
}

/// One-line description of the loaded snapshot.
pub fn snapshot_summary(ledger: &Ledger) -> String {
    let last = ledger
        .last_block()
        .and_then(|b| b.recorded_at())
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string());
    match last {
        Some(at) => format!(
            "{} blocks, {} transfers, last block at {at}",
            ledger.len(),
            ledger.transfer_count()
        ),
        None => format!("{} blocks, {} transfers", ledger.len(), ledger.transfer_count()),
    }
}
