// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::engine::report::{
    UNCATEGORIZED, UNKNOWN_ACCOUNT, spend_by_account, spend_by_category, spend_by_month,
};
use billfold::models::{Account, Category, CategoryKind, Transaction, TxKind};
use chrono::NaiveDate;

fn accounts() -> Vec<Account> {
    vec![
        Account::cash("wallet", "Wallet", 0),
        Account::cash("checking", "Checking", 0),
    ]
}

fn categories() -> Vec<Category> {
    vec![
        Category::new("groceries", "Groceries", CategoryKind::Expense),
        Category::new("transport", "Transport", CategoryKind::Expense),
        Category::new("salary", "Salary", CategoryKind::Income),
    ]
}

fn expense(date: &str, cents: i64, from: &str, category: Option<&str>) -> Transaction {
    Transaction::new(
        date.parse::<NaiveDate>().unwrap(),
        cents,
        TxKind::Expense {
            account_from: from.into(),
            category: category.map(str::to_string),
            payment_method: None,
        },
        None,
    )
    .unwrap()
}

fn income(date: &str, cents: i64, to: &str) -> Transaction {
    Transaction::new(
        date.parse::<NaiveDate>().unwrap(),
        cents,
        TxKind::Income {
            account_to: to.into(),
            category: None,
        },
        None,
    )
    .unwrap()
}

#[test]
fn by_category_groups_and_buckets_uncategorized() {
    let txs = vec![
        expense("2025-01-05", 1_000, "wallet", Some("groceries")),
        expense("2025-01-06", 500, "wallet", None),
        expense("2025-01-07", 2_000, "wallet", Some("groceries")),
        expense("2025-01-08", 300, "wallet", Some("deleted-cat")),
        income("2025-01-09", 90_000, "checking"),
    ];
    let groups = spend_by_category(&categories(), &txs);
    assert_eq!(
        groups,
        vec![
            ("Groceries".to_string(), 3_000),
            (UNCATEGORIZED.to_string(), 800),
        ]
    );
}

#[test]
fn by_account_resolves_names_in_first_seen_order() {
    let txs = vec![
        expense("2025-01-05", 100, "checking", None),
        expense("2025-01-06", 200, "wallet", None),
        expense("2025-01-07", 300, "checking", None),
        expense("2025-01-08", 400, "ghost", None),
    ];
    let groups = spend_by_account(&accounts(), &txs);
    assert_eq!(
        groups,
        vec![
            ("Checking".to_string(), 400),
            ("Wallet".to_string(), 200),
            (UNKNOWN_ACCOUNT.to_string(), 400),
        ]
    );
}

#[test]
fn transfers_never_count_as_spending() {
    let transfer = Transaction::new(
        "2025-01-05".parse::<NaiveDate>().unwrap(),
        5_000,
        TxKind::Transfer {
            account_from: "wallet".into(),
            account_to: "checking".into(),
        },
        None,
    )
    .unwrap();
    assert!(spend_by_account(&accounts(), &[transfer.clone()]).is_empty());
    assert!(spend_by_category(&categories(), &[transfer]).is_empty());
}

#[test]
fn by_month_caps_at_most_recent_six_ascending() {
    // Eight distinct months, deliberately out of order.
    let months = [
        "2024-11", "2025-03", "2024-09", "2025-01", "2024-12", "2025-04", "2024-10", "2025-02",
    ];
    let txs: Vec<_> = months
        .iter()
        .map(|m| expense(&format!("{m}-15"), 1_000, "wallet", None))
        .collect();
    let groups = spend_by_month(&txs);
    let labels: Vec<&str> = groups.iter().map(|(m, _)| m.as_str()).collect();
    assert_eq!(
        labels,
        vec!["2024-11", "2024-12", "2025-01", "2025-02", "2025-03", "2025-04"]
    );
    assert!(groups.iter().all(|(_, cents)| *cents == 1_000));
}

#[test]
fn by_month_sums_within_a_month() {
    let txs = vec![
        expense("2025-01-05", 1_000, "wallet", None),
        expense("2025-01-28", 250, "checking", None),
        income("2025-01-30", 90_000, "checking"),
        expense("2025-02-02", 400, "wallet", None),
    ];
    let groups = spend_by_month(&txs);
    assert_eq!(
        groups,
        vec![("2025-01".to_string(), 1_250), ("2025-02".to_string(), 400)]
    );
}
