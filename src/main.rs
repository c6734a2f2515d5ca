// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tallybook::{cli, commands, config::Settings, ledger::Ledger, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    utils::init_tracing(matches.get_flag("verbose"));

    let settings = Settings::from_matches(&matches)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            let store = settings.open_store()?;
            println!("Ledger store ({}) at {}", settings.backend, store.describe());
        }
        Some(("tx", sub)) => {
            let mut ledger = Ledger::load(settings.open_store()?);
            commands::transactions::handle(&mut ledger, sub)?;
        }
        Some(("summary", sub)) => {
            let ledger = Ledger::load(settings.open_store()?);
            commands::reports::handle(&ledger, sub)?;
        }
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
