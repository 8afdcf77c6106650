// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Account, AccountKind, Transaction, TxKind};

#[derive(Debug, Clone, Serialize)]
pub struct AccountBalance {
    pub account_id: String,
    pub name: String,
    pub balance_cents: i64,
    /// `limit - debt` for credit accounts, absent for cash accounts. Goes
    /// negative when overdrawn.
    pub credit_available_cents: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceSheet {
    pub per_account: Vec<AccountBalance>,
    pub liquidity_cents: i64,
}

/// Running state per account while folding the log. A deposit pays down
/// credit debt; a withdrawal charges it. On cash it moves the balance
/// directly. Nothing is clamped: credit debt may go negative (a balance in
/// the holder's favor) and cash may overdraw.
enum Running {
    Cash { balance: i64 },
    Credit { limit: i64, debt: i64 },
}

impl Running {
    fn seed(kind: &AccountKind) -> Self {
        match *kind {
            AccountKind::Cash { opening_cents } => Running::Cash {
                balance: opening_cents,
            },
            AccountKind::Credit {
                limit_cents,
                opening_debt_cents,
            } => Running::Credit {
                limit: limit_cents,
                debt: opening_debt_cents,
            },
        }
    }

    fn deposit(&mut self, amount: i64) {
        match self {
            Running::Cash { balance } => *balance += amount,
            Running::Credit { debt, .. } => *debt -= amount,
        }
    }

    fn withdraw(&mut self, amount: i64) {
        match self {
            Running::Cash { balance } => *balance -= amount,
            Running::Credit { debt, .. } => *debt += amount,
        }
    }
}

/// Replays the whole log against the registry. Each transaction's effect
/// depends only on its own fields and the kinds of the accounts it names, so
/// the fold is invariant under any reordering of `transactions`. A
/// transaction naming an unknown account id is skipped whole, as is a
/// transfer whose endpoints are equal (possible via import).
///
/// Transfers out of a credit account charge the source like a purchase: a
/// credit-to-cash transfer is a cash advance, credit-to-credit a balance
/// transfer.
pub fn compute_balances(
    accounts: &[Account],
    transactions: &[Transaction],
    liquid_ids: &[String],
) -> BalanceSheet {
    let mut state: HashMap<&str, Running> = accounts
        .iter()
        .map(|a| (a.id.as_str(), Running::seed(&a.kind)))
        .collect();

    for tx in transactions {
        let amount = tx.amount_cents;
        match &tx.kind {
            TxKind::Income { account_to, .. } => {
                if let Some(dest) = state.get_mut(account_to.as_str()) {
                    dest.deposit(amount);
                }
            }
            TxKind::Expense { account_from, .. } => {
                if let Some(src) = state.get_mut(account_from.as_str()) {
                    src.withdraw(amount);
                }
            }
            TxKind::Transfer {
                account_from,
                account_to,
            } => {
                if account_from == account_to
                    || !state.contains_key(account_from.as_str())
                    || !state.contains_key(account_to.as_str())
                {
                    continue;
                }
                if let Some(src) = state.get_mut(account_from.as_str()) {
                    src.withdraw(amount);
                }
                if let Some(dest) = state.get_mut(account_to.as_str()) {
                    dest.deposit(amount);
                }
            }
        }
    }

    let per_account: Vec<AccountBalance> = accounts
        .iter()
        .map(|a| match state[a.id.as_str()] {
            Running::Cash { balance } => AccountBalance {
                account_id: a.id.clone(),
                name: a.name.clone(),
                balance_cents: balance,
                credit_available_cents: None,
            },
            Running::Credit { limit, debt } => AccountBalance {
                account_id: a.id.clone(),
                name: a.name.clone(),
                balance_cents: -debt,
                credit_available_cents: Some(limit - debt),
            },
        })
        .collect();

    let liquidity_cents = liquid_ids
        .iter()
        .filter_map(|id| match state.get(id.as_str()) {
            Some(Running::Cash { balance }) => Some(*balance),
            _ => None,
        })
        .sum();

    BalanceSheet {
        per_account,
        liquidity_cents,
    }
}
