//! Snapshot loading from JSON.
//!
//! Two document shapes are accepted: a chain dump `{ "chain": [...], "length": n }`
//! and a bare array of blocks. The shape is picked from the first significant
//! character, so serde errors keep their field name, line and column. Block
//! contents are taken as-is (no hash, proof or index checks).

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::ledger::{Block, Ledger};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read ledger snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read ledger snapshot: {0}")]
    Read(#[source] std::io::Error),

    #[error("malformed ledger snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Chain dump as served by the mining node. `length` and any other
/// top-level keys are ignored.
#[derive(Deserialize)]
struct ChainDump {
    chain: Vec<Block>,
}

impl Ledger {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let blocks = match json.trim_start().as_bytes().first() {
            Some(b'{') => serde_json::from_str::<ChainDump>(json)?.chain,
            _ => serde_json::from_str::<Vec<Block>>(json)?,
        };
        Ok(Ledger::new(blocks))
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut json = String::new();
        reader.read_to_string(&mut json).map_err(LoadError::Read)?;
        Self::from_json_str(&json)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::PreviousHash;

    #[test]
    fn loads_chain_dump_with_headers() {
        let json = r#"{
            "chain": [
                {
                    "index": 1,
                    "timestamp": 1577836800.25,
                    "transactions": [],
                    "proof": 100,
                    "previous_hash": 1
                },
                {
                    "index": 2,
                    "timestamp": 1577836860.0,
                    "transactions": [
                        { "sender": "Alice", "recipient": "Brian", "amount": 50 }
                    ],
                    "proof": 35293,
                    "previous_hash": "8d5b1e"
                }
            ],
            "length": 2
        }"#;

        let ledger = Ledger::from_json_str(json).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transfer_count(), 1);

        let genesis = &ledger.blocks()[0];
        assert_eq!(genesis.index, Some(1));
        assert_eq!(genesis.proof, Some(100));
        assert_eq!(genesis.previous_hash, Some(PreviousHash::Genesis(1)));

        let last = ledger.last_block().unwrap();
        assert_eq!(last.previous_hash, Some(PreviousHash::Hash("8d5b1e".into())));
        assert_eq!(last.transfers()[0].amount, ledgerwallet_core::Amount::from(50u64));
    }

    #[test]
    fn loads_bare_block_array_with_transfers_key() {
        let json = r#"[
            { "transfers": [ { "sender": "a", "recipient": "b", "amount": 3 } ] },
            { "transfers": [] }
        ]"#;

        let ledger = Ledger::from_json_str(json).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.blocks()[0].index, None);
        assert_eq!(ledger.transfer_count(), 1);
    }

    #[test]
    fn from_reader_matches_from_str() {
        let json = r#"[{ "transactions": [ { "sender": "a", "recipient": "a", "amount": 1 } ] }]"#;
        let a = Ledger::from_json_str(json).unwrap();
        let b = Ledger::from_reader(json.as_bytes()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let json = r#"[{ "transactions": [ { "sender": "a", "recipient": "b", "amount": -5 } ] }]"#;
        let err = Ledger::from_json_str(json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
        assert!(err.to_string().contains("must not be negative"), "{err}");
    }

    #[test]
    fn fractional_amounts_load() {
        let json = r#"{ "chain": [ { "transactions": [
            { "sender": "Alice", "recipient": "Brian", "amount": 2.5 },
            { "sender": "Brian", "recipient": "Carol", "amount": 0.25 }
        ] } ], "length": 1 }"#;

        let ledger = Ledger::from_json_str(json).unwrap();
        let amounts: Vec<String> = ledger.all_transfers().map(|t| t.amount.to_string()).collect();
        assert_eq!(amounts, vec!["2.5", "0.25"]);
    }

    #[test]
    fn errors_name_the_field_and_position() {
        let json = r#"{
    "chain": [
        { "transactions": [ { "sender": "Alice", "amount": 2 } ] }
    ]
}"#;
        let err = Ledger::from_json_str(json).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing field `recipient`"), "{msg}");
        assert!(msg.contains("line 3"), "{msg}");

        let err = Ledger::from_json_str(r#"[ { "transactions": [ { "sender": "a", "recipient": "b" } ] } ]"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `amount`"), "{err}");
    }

    #[test]
    fn chain_dump_without_chain_key_is_reported() {
        let err = Ledger::from_json_str(r#"{ "length": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("missing field `chain`"), "{err}");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Ledger::from_path("/nonexistent/ledger.json").unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/ledger.json")),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
