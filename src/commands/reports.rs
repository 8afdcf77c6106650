// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config::Config;
use crate::engine::balance::compute_balances;
use crate::engine::report::{spend_by_account, spend_by_category, spend_by_month};
use crate::models::Transaction;
use crate::money::fmt_cents;
use crate::session::Session;
use crate::utils::{maybe_print_json, parse_month, pretty_table};

pub fn handle(session: &Session, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balances", sub)) => balances(session, cfg, sub),
        Some(("spend-by-account", sub)) => {
            let txs = month_slice(session, sub)?;
            spending(sub, "Account", spend_by_account(&session.accounts, &txs))
        }
        Some(("spend-by-category", sub)) => {
            let txs = month_slice(session, sub)?;
            spending(sub, "Category", spend_by_category(&session.categories, &txs))
        }
        Some(("by-month", sub)) => {
            // Always the whole log; the six-month window is part of the view.
            spending(sub, "Month", spend_by_month(&session.transactions))
        }
        _ => Ok(()),
    }
}

fn balances(session: &Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let sheet = compute_balances(
        &session.accounts,
        &session.transactions,
        &cfg.liquid_account_ids,
    );
    if maybe_print_json(json_flag, jsonl_flag, &sheet)? {
        return Ok(());
    }
    let mut rows: Vec<Vec<String>> = sheet
        .per_account
        .iter()
        .map(|b| {
            vec![
                b.name.clone(),
                fmt_cents(b.balance_cents),
                b.credit_available_cents
                    .map(fmt_cents)
                    .unwrap_or_default(),
            ]
        })
        .collect();
    rows.push(vec![
        "Liquidity".into(),
        fmt_cents(sheet.liquidity_cents),
        String::new(),
    ]);
    println!(
        "{}",
        pretty_table(&["Account", "Balance", "Available"], rows)
    );
    Ok(())
}

fn spending(sub: &clap::ArgMatches, label: &str, groups: Vec<(String, i64)>) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<Vec<String>> = groups
        .into_iter()
        .map(|(name, cents)| vec![name, fmt_cents(cents)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&[label, "Spent"], data));
    }
    Ok(())
}

fn month_slice(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let month = match sub.get_one::<String>("month") {
        Some(s) => Some(parse_month(s)?),
        None => None,
    };
    Ok(session
        .transactions
        .iter()
        .filter(|t| match &month {
            Some(m) => t.date.format("%Y-%m").to_string() == *m,
            None => true,
        })
        .cloned()
        .collect())
}
