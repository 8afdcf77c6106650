// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::fs::File;

use crate::session::Session;
use crate::tabular;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(session, sub),
        _ => Ok(()),
    }
}

fn export_transactions(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let file = File::create(out).with_context(|| format!("Create {}", out))?;
    tabular::write_transactions(file, &session.transactions)?;
    println!(
        "Exported {} transactions to {}",
        session.transactions.len(),
        out
    );
    Ok(())
}
