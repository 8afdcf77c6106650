// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::utils::pretty_table;
use anyhow::Result;

/// Sweeps the log for references the registries can no longer resolve.
/// Dangling rows are inert for balances, so this is advisory only.
pub fn handle(session: &Session) -> Result<()> {
    let mut rows = Vec::new();

    for tx in &session.transactions {
        for id in [tx.account_from(), tx.account_to()].into_iter().flatten() {
            if session.account(id).is_none() {
                rows.push(vec!["unknown_account".into(), format!("{} ({})", id, tx.id)]);
            }
        }
        if let Some(id) = tx.category() {
            if session.category(id).is_none() {
                rows.push(vec![
                    "unknown_category".into(),
                    format!("{} ({})", id, tx.id),
                ]);
            }
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
