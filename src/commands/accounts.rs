// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::AccountKind;
use crate::money::fmt_cents;
use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, sub),
        _ => Ok(()),
    }
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &session.accounts)? {
        return Ok(());
    }
    let rows = session
        .accounts
        .iter()
        .map(|a| match a.kind {
            AccountKind::Cash { opening_cents } => vec![
                a.id.clone(),
                a.name.clone(),
                "cash".into(),
                fmt_cents(opening_cents),
                String::new(),
            ],
            AccountKind::Credit {
                limit_cents,
                opening_debt_cents,
            } => vec![
                a.id.clone(),
                a.name.clone(),
                "credit".into(),
                fmt_cents(-opening_debt_cents),
                fmt_cents(limit_cents),
            ],
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Name", "Type", "Opening", "Limit"], rows)
    );
    Ok(())
}
