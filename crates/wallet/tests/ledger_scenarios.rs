use ledgerwallet_core::{Decimal, DomainError};
use ledgerwallet_ledger::Ledger;
use ledgerwallet_wallet::{query_wallet, wallet_for};

const CHAIN: &str = r#"{
    "chain": [
        { "index": 1, "timestamp": 1577836800.0, "transactions": [], "proof": 100, "previous_hash": 1 },
        {
            "index": 2,
            "timestamp": 1577836900.0,
            "transactions": [
                { "sender": "0", "recipient": "Brian", "amount": 1 },
                { "sender": "Alice", "recipient": "Brian", "amount": 50 }
            ],
            "proof": 35293,
            "previous_hash": "2a1f"
        },
        {
            "index": 3,
            "timestamp": 1577837000.0,
            "transactions": [
                { "sender": "Brian", "recipient": "Carol", "amount": 20 },
                { "sender": "Brian", "recipient": "Brian", "amount": 4 },
                { "sender": "Carol", "recipient": "Alice", "amount": 7 }
            ],
            "proof": 1120,
            "previous_hash": "9c0e"
        }
    ],
    "length": 3
}"#;

fn chain() -> Ledger {
    Ledger::from_json_str(CHAIN).expect("fixture parses")
}

#[test]
fn history_spans_blocks_in_chain_order() {
    let wallet = query_wallet(&chain(), "Brian").unwrap();

    let rows: Vec<String> = wallet
        .history
        .iter()
        .map(|t| format!("{}>{}:{}", t.sender, t.recipient, t.amount))
        .collect();
    assert_eq!(
        rows,
        vec!["0>Brian:1", "Alice>Brian:50", "Brian>Carol:20", "Brian>Brian:4"]
    );
    assert_eq!(wallet.received, Decimal::from(55));
    assert_eq!(wallet.sent, Decimal::from(24));
    assert_eq!(wallet.balance, Decimal::from(31));
}

#[test]
fn every_participant_nets_to_the_mint() {
    let ledger = chain();
    let total: Decimal = ["0", "Alice", "Brian", "Carol"]
        .iter()
        .map(|name| query_wallet(&ledger, name).unwrap().balance)
        .sum();
    assert_eq!(total, Decimal::ZERO);
}

#[test]
fn invalid_input_is_distinct_from_unknown_user() {
    let ledger = chain();

    let unknown = query_wallet(&ledger, "Eve").unwrap();
    assert!(unknown.is_empty());
    assert_eq!(unknown.balance, Decimal::ZERO);

    assert_eq!(
        query_wallet(&ledger, ""),
        Err(DomainError::invalid_identity("identity must not be empty"))
    );
}

#[test]
fn concurrent_queries_share_one_snapshot() {
    let ledger = chain();
    let names = ["Alice", "Brian", "Carol", "Eve"];

    let serial: Vec<_> = names
        .iter()
        .map(|n| query_wallet(&ledger, n).unwrap())
        .collect();

    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = names
            .iter()
            .map(|n| {
                let ledger = &ledger;
                s.spawn(move || query_wallet(ledger, n).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, parallel);
}

#[test]
fn typed_entry_point_matches_string_entry_point() {
    let ledger = chain();
    let identity = "Carol".parse().unwrap();
    assert_eq!(wallet_for(&ledger, &identity), query_wallet(&ledger, "Carol").unwrap());
}

#[test]
fn fractional_snapshot_stays_queryable() {
    let ledger = Ledger::from_json_str(
        r#"[{ "transactions": [
            { "sender": "Alice", "recipient": "Brian", "amount": 2.5 },
            { "sender": "Brian", "recipient": "Carol", "amount": 1 }
        ] }]"#,
    )
    .unwrap();

    let brian = query_wallet(&ledger, "Brian").unwrap();
    assert_eq!(brian.balance, "1.5".parse::<Decimal>().unwrap());

    let alice = query_wallet(&ledger, "Alice").unwrap();
    assert_eq!(alice.balance, "-2.5".parse::<Decimal>().unwrap());
}
