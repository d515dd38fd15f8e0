// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod crud;
pub mod init;

use crate::cli::{OBJECT_BICYCLE_TYPE, OBJECT_CATEGORY};
use crate::config::{Config, Settings};
use crate::models::{BicycleType, Category};
use anyhow::{Result, bail};
use std::path::Path;

pub const ERR_MISSING_FILE: &str =
    "missing information about data file. Specify it with --file or -f flag.";
pub const ERR_MISSING_NAME: &str = "missing name. Specify it with --name or -n flag.";
pub const ERR_MISSING_ID: &str = "missing id. Specify it with --id or -i flag.";

/// Routes `<verb> <object>` to the matching handler.
pub fn handle(cfg: &Config, verb: &str, m: &clap::ArgMatches) -> Result<()> {
    let Some((object, sub)) = m.subcommand() else {
        bail!("missing object for '{}'", verb);
    };
    tracing::debug!(verb, object, "dispatching");
    match (verb, object) {
        ("add", OBJECT_BICYCLE_TYPE) => crud::add::<BicycleType>(cfg, sub),
        ("add", OBJECT_CATEGORY) => crud::add::<Category>(cfg, sub),
        ("list", OBJECT_BICYCLE_TYPE) => crud::list::<BicycleType>(cfg, sub),
        ("list", OBJECT_CATEGORY) => crud::list::<Category>(cfg, sub),
        ("edit", OBJECT_BICYCLE_TYPE) => crud::edit::<BicycleType>(cfg, sub),
        ("edit", OBJECT_CATEGORY) => crud::edit::<Category>(cfg, sub),
        ("delete", OBJECT_BICYCLE_TYPE) => crud::delete::<BicycleType>(cfg, sub),
        ("delete", OBJECT_CATEGORY) => crud::delete::<Category>(cfg, sub),
        _ => bail!("unknown command '{} {}'", verb, object),
    }
}

pub fn settings(cfg: &Config, m: &clap::ArgMatches) -> Settings {
    cfg.resolve(
        m.get_one::<String>("file").map(String::as_str),
        m.get_flag("verbose"),
    )
}

pub fn require_file(settings: &Settings) -> Result<&Path> {
    match settings.data_file.as_deref() {
        Some(p) => Ok(p),
        None => bail!(ERR_MISSING_FILE),
    }
}

pub fn require_name(m: &clap::ArgMatches) -> Result<&str> {
    match m.get_one::<String>("name") {
        Some(n) if !n.is_empty() => Ok(n),
        _ => bail!(ERR_MISSING_NAME),
    }
}

pub fn require_id(m: &clap::ArgMatches) -> Result<i64> {
    match m.get_one::<i64>("id") {
        Some(id) => Ok(*id),
        None => bail!(ERR_MISSING_ID),
    }
}
