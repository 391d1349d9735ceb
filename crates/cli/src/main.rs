use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use ledgerwallet_cli::render::{render, snapshot_summary};
use ledgerwallet_cli::{Args, WalletRequest, handle};

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let source = args.ledger_source();
    let ledger = source
        .load()
        .with_context(|| format!("failed to load ledger from {source:?}"))?;
    tracing::info!(snapshot = %snapshot_summary(&ledger), "ledger ready");

    let response = handle(&ledger, &WalletRequest::new(args.identity));
    let output = render(&response, args.format).context("failed to render response")?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    if response.is_invalid() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    ledgerwallet_observability::init();

    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "wallet lookup failed");
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}
