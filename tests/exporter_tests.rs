// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::models::{Account, Category, CategoryKind, Transaction, TxKind};
use billfold::session::Session;
use billfold::store::MemStore;
use billfold::{cli, commands::exporter, tabular};
use chrono::NaiveDate;
use tempfile::tempdir;

fn seeded_session() -> Session {
    let mut session = Session::load(Box::new(MemStore::new()));
    session.reconcile(
        &[
            Account::cash("wallet", "Wallet", 0),
            Account::credit("card", "Card", 100_000, 0),
        ],
        &[
            Category::new("groceries", "Groceries", CategoryKind::Expense),
            Category::new("salary", "Salary", CategoryKind::Income),
        ],
    );
    session
}

fn date() -> NaiveDate {
    "2025-03-14".parse().unwrap()
}

#[test]
fn export_writes_header_and_plain_rows() {
    let mut session = seeded_session();
    session
        .add_transaction(
            date(),
            1_250,
            TxKind::Expense {
                account_from: "wallet".into(),
                category: Some("groceries".into()),
                payment_method: Some("cash".into()),
            },
            Some("weekly run".into()),
        )
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["billfold", "export", "transactions", "--out", &out_str]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&session, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,type,date,amountCents,accountFromId,accountToId,categoryId,paymentMethod,note"
    );
    let row = lines.next().unwrap();
    let fields: Vec<&str> = row.split(',').collect();
    assert_eq!(fields.len(), 9);
    assert_eq!(fields[1], "GASTO");
    assert_eq!(fields[2], "2025-03-14");
    assert_eq!(fields[3], "1250");
    assert_eq!(fields[4], "wallet");
    assert_eq!(fields[5], "");
    assert_eq!(fields[6], "groceries");
    assert_eq!(fields[7], "cash");
    assert_eq!(fields[8], "weekly run");
}

#[test]
fn embedded_commas_become_semicolons() {
    let mut session = seeded_session();
    session
        .add_transaction(
            date(),
            9_900,
            TxKind::Income {
                account_to: "wallet".into(),
                category: None,
            },
            Some("bonus, march, gross".into()),
        )
        .unwrap();

    let mut buf = Vec::new();
    tabular::write_transactions(&mut buf, &session.transactions).unwrap();
    let contents = String::from_utf8(buf).unwrap();
    let row = contents.lines().nth(1).unwrap();
    assert_eq!(row.split(',').count(), 9);
    assert!(row.ends_with("bonus; march; gross"));
}

#[test]
fn round_trip_preserves_the_record_multiset() {
    let mut session = seeded_session();
    session
        .add_transaction(
            date(),
            1_250,
            TxKind::Expense {
                account_from: "wallet".into(),
                category: Some("groceries".into()),
                payment_method: Some("cash".into()),
            },
            None,
        )
        .unwrap();
    session
        .add_transaction(
            date(),
            90_000,
            TxKind::Income {
                account_to: "wallet".into(),
                category: Some("salary".into()),
            },
            Some("payday".into()),
        )
        .unwrap();
    session
        .add_transaction(
            "2025-04-01".parse().unwrap(),
            5_000,
            TxKind::Transfer {
                account_from: "wallet".into(),
                account_to: "card".into(),
            },
            None,
        )
        .unwrap();

    let mut buf = Vec::new();
    tabular::write_transactions(&mut buf, &session.transactions).unwrap();
    let reimported = tabular::read_transactions(buf.as_slice(), date()).unwrap();

    fn key(tx: &Transaction) -> (String, String, i64, String, String, String, String) {
        (
            match tx.kind {
                TxKind::Income { .. } => "income".into(),
                TxKind::Expense { .. } => "expense".into(),
                TxKind::Transfer { .. } => "transfer".into(),
            },
            tx.date.to_string(),
            tx.amount_cents,
            tx.account_from().unwrap_or_default().to_string(),
            tx.account_to().unwrap_or_default().to_string(),
            tx.category().unwrap_or_default().to_string(),
            tx.payment_method().unwrap_or_default().to_string(),
        )
    }

    let mut original: Vec<_> = session.transactions.iter().map(key).collect();
    let mut restored: Vec<_> = reimported.iter().map(key).collect();
    original.sort();
    restored.sort();
    assert_eq!(original, restored);

    // Ids survive the trip too when present in the file.
    let original_ids: Vec<_> = session.transactions.iter().map(|t| t.id).collect();
    let restored_ids: Vec<_> = reimported.iter().map(|t| t.id).collect();
    assert_eq!(original_ids, restored_ids);
}
