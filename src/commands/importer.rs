// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::fs::File;

use crate::session::Session;
use crate::tabular;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(session, sub),
        _ => Ok(()),
    }
}

fn import_transactions(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let file = File::open(path).with_context(|| format!("Open CSV {}", path))?;
    let today = chrono::Utc::now().date_naive();
    let parsed = tabular::read_transactions(file, today)?;
    let count = parsed.len();
    session.import_transactions(parsed);
    println!("Imported {} transactions from {}", count, path);
    Ok(())
}
