// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Account, Category, Transaction};

pub const UNCATEGORIZED: &str = "(uncategorized)";
pub const UNKNOWN_ACCOUNT: &str = "(unknown account)";

const MONTHS_SHOWN: usize = 6;

/// Expense totals grouped by source-account display name, in first-seen
/// input order. Income and transfers never count as spending.
pub fn spend_by_account(accounts: &[Account], transactions: &[Transaction]) -> Vec<(String, i64)> {
    group_expenses(transactions, |tx| {
        let id = tx.account_from().unwrap_or_default();
        accounts
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| UNKNOWN_ACCOUNT.to_string())
    })
}

/// Expense totals grouped by resolved category name, in first-seen input
/// order, with a placeholder bucket for absent or dangling categories.
pub fn spend_by_category(
    categories: &[Category],
    transactions: &[Transaction],
) -> Vec<(String, i64)> {
    group_expenses(transactions, |tx| {
        tx.category()
            .and_then(|id| categories.iter().find(|c| c.id == id))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNCATEGORIZED.to_string())
    })
}

/// Expense totals per calendar month over the entire log, truncated to the
/// most recent six distinct months present, ascending.
pub fn spend_by_month(transactions: &[Transaction]) -> Vec<(String, i64)> {
    let mut map: BTreeMap<String, i64> = BTreeMap::new();
    for tx in transactions.iter().filter(|t| t.is_expense()) {
        *map.entry(tx.date.format("%Y-%m").to_string()).or_insert(0) += tx.amount_cents;
    }
    let skip = map.len().saturating_sub(MONTHS_SHOWN);
    map.into_iter().skip(skip).collect()
}

fn group_expenses<F>(transactions: &[Transaction], label: F) -> Vec<(String, i64)>
where
    F: Fn(&Transaction) -> String,
{
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, i64> = HashMap::new();
    for tx in transactions.iter().filter(|t| t.is_expense()) {
        let key = label(tx);
        if !totals.contains_key(&key) {
            order.push(key.clone());
        }
        *totals.entry(key).or_insert(0) += tx.amount_cents;
    }
    order
        .into_iter()
        .map(|key| {
            let total = totals[&key];
            (key, total)
        })
        .collect()
}
