// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use billfold::{cli, commands, config, session::Session, store, utils};

fn main() -> Result<()> {
    utils::init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = config::load_or_default()?;
    let kv = store::SqliteStore::open_or_init()?;
    let mut session = Session::load(Box::new(kv));
    session.reconcile(&cfg.seed_accounts, &cfg.seed_categories);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data store initialized at {}", store::db_path()?.display());
        }
        Some(("account", sub)) => commands::accounts::handle(&session, sub)?,
        Some(("category", sub)) => commands::categories::handle(&session, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut session, &cfg, sub)?,
        Some(("report", sub)) => commands::reports::handle(&session, &cfg, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&session, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&session)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
