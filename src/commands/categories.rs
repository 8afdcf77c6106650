// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if maybe_print_json(json_flag, jsonl_flag, &session.categories)? {
                return Ok(());
            }
            let rows = session
                .categories
                .iter()
                .map(|c| vec![c.id.clone(), c.name.clone(), format!("{:?}", c.kind)])
                .collect();
            println!("{}", pretty_table(&["Id", "Name", "Kind"], rows));
            Ok(())
        }
        _ => Ok(()),
    }
}
