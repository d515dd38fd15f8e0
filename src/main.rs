// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use biclog::{cli, commands, config::Config, utils};

fn main() {
    utils::init_logging();
    if let Err(err) = run() {
        eprintln!("biclog: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cfg = Config::load()?;
    tracing::debug!(?cfg, "loaded config");
    let matches = cli::build_cli().get_matches();

    match matches.subcommand() {
        Some(("init", sub)) => commands::init::handle(&cfg, sub)?,
        Some((verb @ ("add" | "list" | "edit" | "delete"), sub)) => {
            commands::handle(&cfg, verb, sub)?
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
