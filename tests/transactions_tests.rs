// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::config::Config;
use billfold::models::TxKind;
use billfold::session::Session;
use billfold::store::MemStore;
use billfold::{cli, commands::transactions};

fn seeded_session() -> (Session, Config) {
    let cfg = Config::default();
    let mut session = Session::load(Box::new(MemStore::new()));
    session.reconcile(&cfg.seed_accounts, &cfg.seed_categories);
    (session, cfg)
}

fn run_tx(session: &mut Session, cfg: &Config, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["billfold", "tx"];
    argv.extend_from_slice(args);
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(session, cfg, tx_m)
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn add_records_an_expense_with_decimal_amount() {
    let (mut session, cfg) = seeded_session();
    run_tx(
        &mut session,
        &cfg,
        &[
            "add",
            "--type",
            "expense",
            "--amount",
            "12.50",
            "--date",
            "2025-03-14",
            "--from",
            "wallet",
            "--category",
            "groceries",
        ],
    )
    .unwrap();

    let tx = &session.transactions[0];
    assert_eq!(tx.amount_cents, 1_250);
    assert_eq!(tx.account_from(), Some("wallet"));
    assert_eq!(tx.category(), Some("groceries"));
}

#[test]
fn add_resolves_source_from_payment_method() {
    let (mut session, cfg) = seeded_session();
    run_tx(
        &mut session,
        &cfg,
        &[
            "add", "--type", "expense", "--amount", "30", "--date", "2025-03-14", "--method",
            "debit",
        ],
    )
    .unwrap();

    match &session.transactions[0].kind {
        TxKind::Expense {
            account_from,
            payment_method,
            ..
        } => {
            assert_eq!(account_from, "checking");
            assert_eq!(payment_method.as_deref(), Some("debit"));
        }
        other => panic!("expected expense, got {other:?}"),
    }
}

#[test]
fn add_requires_a_destination_for_income() {
    let (mut session, cfg) = seeded_session();
    let err = run_tx(
        &mut session,
        &cfg,
        &["add", "--type", "income", "--amount", "10"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("--to"));
    assert!(session.transactions.is_empty());
}

#[test]
fn add_rejects_sub_cent_amounts() {
    let (mut session, cfg) = seeded_session();
    let err = run_tx(
        &mut session,
        &cfg,
        &[
            "add", "--type", "income", "--amount", "0.005", "--to", "wallet",
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("sub-cent"));
}

#[test]
fn list_limit_and_month_filter_respected() {
    let (mut session, cfg) = seeded_session();
    for (date, amount) in [
        ("2025-01-01", "10"),
        ("2025-01-02", "20"),
        ("2025-02-03", "30"),
    ] {
        run_tx(
            &mut session,
            &cfg,
            &[
                "add", "--type", "income", "--amount", amount, "--date", date, "--to", "wallet",
            ],
        )
        .unwrap();
    }

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["billfold", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&session, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, "2025-02-03");
        } else {
            panic!("no list subcommand");
        }
    }

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["billfold", "tx", "list", "--month", "2025-01"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&session, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert!(rows.iter().all(|r| r.date.starts_with("2025-01")));
        }
    }
}

#[test]
fn rm_deletes_by_id() {
    let (mut session, cfg) = seeded_session();
    run_tx(
        &mut session,
        &cfg,
        &[
            "add", "--type", "income", "--amount", "10", "--to", "wallet",
        ],
    )
    .unwrap();
    let id = session.transactions[0].id.to_string();
    run_tx(&mut session, &cfg, &["rm", "--id", &id]).unwrap();
    assert!(session.transactions.is_empty());

    let err = run_tx(&mut session, &cfg, &["rm", "--id", "not-a-uuid"]).unwrap_err();
    assert!(err.to_string().contains("Invalid transaction id"));
}
