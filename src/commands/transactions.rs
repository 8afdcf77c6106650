// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::engine::report::{UNCATEGORIZED, UNKNOWN_ACCOUNT};
use crate::models::{Transaction, TxKind};
use crate::money::{fmt_cents, parse_cents};
use crate::session::Session;
use crate::utils::{maybe_print_json, parse_date, parse_month, pretty_table};

pub fn handle(session: &mut Session, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, cfg, sub),
        Some(("list", sub)) => list(session, sub),
        Some(("rm", sub)) => rm(session, sub),
        _ => Ok(()),
    }
}

fn add(session: &mut Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let typ = sub.get_one::<String>("type").unwrap().as_str();
    let amount_cents = parse_cents(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let from = sub.get_one::<String>("from").cloned();
    let to = sub.get_one::<String>("to").cloned();
    let category = sub.get_one::<String>("category").cloned();
    let method = sub.get_one::<String>("method").cloned();
    let note = sub.get_one::<String>("note").cloned();

    let kind = match typ {
        "income" => TxKind::Income {
            account_to: to.ok_or_else(|| anyhow!("--to is required for income"))?,
            category,
        },
        "expense" => {
            let account_from = match (from, method.as_deref()) {
                (Some(f), _) => f,
                (None, Some(tag)) => cfg
                    .account_for_method(tag)
                    .ok_or_else(|| anyhow!("Payment method '{}' is not mapped, pass --from", tag))?
                    .to_string(),
                (None, None) => return Err(anyhow!("--from or --method is required for expense")),
            };
            TxKind::Expense {
                account_from,
                category,
                payment_method: method,
            }
        }
        "transfer" => TxKind::Transfer {
            account_from: from.ok_or_else(|| anyhow!("--from is required for transfer"))?,
            account_to: to.ok_or_else(|| anyhow!("--to is required for transfer"))?,
        },
        other => return Err(anyhow!("Unknown transaction type '{}'", other)),
    };

    let id = session.add_transaction(date, amount_cents, kind, note)?;
    println!(
        "Recorded {} {} on {} ({})",
        typ,
        fmt_cents(amount_cents),
        date,
        id
    );
    Ok(())
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(session, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.r#type.clone(),
                    r.amount.clone(),
                    r.from.clone(),
                    r.to.clone(),
                    r.category.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Amount", "From", "To", "Category", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("id").unwrap();
    let id = raw
        .parse::<Uuid>()
        .map_err(|_| anyhow!("Invalid transaction id '{}'", raw))?;
    if session.delete_transaction(id) {
        println!("Removed transaction {}", id);
    } else {
        println!("No transaction {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub amount: String,
    pub from: String,
    pub to: String,
    pub category: String,
    pub method: String,
    pub note: String,
}

/// Newest-first listing with display names resolved; dangling references
/// render as placeholders, never errors.
pub fn query_rows(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = match sub.get_one::<String>("month") {
        Some(s) => Some(parse_month(s)?),
        None => None,
    };

    let account_label = |id: Option<&str>| -> String {
        match id {
            Some(id) => session
                .account(id)
                .map(|a| a.name.clone())
                .unwrap_or_else(|| UNKNOWN_ACCOUNT.to_string()),
            None => String::new(),
        }
    };

    let mut selected: Vec<&Transaction> = session
        .transactions
        .iter()
        .filter(|t| match &month {
            Some(m) => t.date.format("%Y-%m").to_string() == *m,
            None => true,
        })
        .collect();
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        selected.truncate(*limit);
    }

    let data = selected
        .into_iter()
        .map(|t| {
            let typ = match t.kind {
                TxKind::Income { .. } => "income",
                TxKind::Expense { .. } => "expense",
                TxKind::Transfer { .. } => "transfer",
            };
            let category = match t.category() {
                Some(id) => session
                    .category(id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| UNCATEGORIZED.to_string()),
                None => String::new(),
            };
            TransactionRow {
                id: t.id.to_string(),
                date: t.date.to_string(),
                r#type: typ.to_string(),
                amount: fmt_cents(t.amount_cents),
                from: account_label(t.account_from()),
                to: account_label(t.account_to()),
                category,
                method: t.payment_method().unwrap_or_default().to_string(),
                note: t.note.clone().unwrap_or_default(),
            }
        })
        .collect();
    Ok(data)
}
