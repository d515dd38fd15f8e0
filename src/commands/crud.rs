// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{require_file, require_id, require_name, settings};
use crate::config::Config;
use crate::models::Entity;
use crate::ops;
use crate::utils::to_json;
use anyhow::Result;
use serde::Serialize;

pub fn add<E: Entity>(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let settings = settings(cfg, m);
    let path = require_file(&settings)?;
    let name = require_name(m)?;
    let created: E = ops::add(path, name)?;
    tracing::info!(kind = E::KIND, id = created.id(), "added");
    if settings.verbose {
        println!("biclog: added new {}: {}.", E::KIND, created.name());
    }
    Ok(())
}

pub fn list<E: Entity + Serialize>(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let settings = settings(cfg, m);
    let path = require_file(&settings)?;
    let items = ops::list::<E>(path)?;
    tracing::debug!(kind = E::KIND, count = items.len(), "listed");
    if m.get_flag("json") {
        println!("{}", to_json(&items)?);
        return Ok(());
    }
    if items.is_empty() {
        println!("biclog: no {}.", E::PLURAL);
        return Ok(());
    }
    for line in items.render() {
        println!("{}", line.trim_end());
    }
    Ok(())
}

pub fn edit<E: Entity>(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let settings = settings(cfg, m);
    let path = require_file(&settings)?;
    let id = require_id(m)?;
    let name = require_name(m)?;
    let (old_name, new_name) = ops::edit::<E>(path, id, name)?;
    tracing::info!(kind = E::KIND, id, "renamed");
    if settings.verbose {
        println!(
            "biclog: change {} name from {} to {}.",
            E::KIND,
            old_name,
            new_name
        );
    }
    Ok(())
}

pub fn delete<E: Entity>(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let settings = settings(cfg, m);
    let path = require_file(&settings)?;
    let id = require_id(m)?;
    let removed: E = ops::delete(path, id)?;
    tracing::info!(kind = E::KIND, id, "deleted");
    if settings.verbose {
        println!("biclog: deleted {} {}.", E::KIND, removed.name());
    }
    Ok(())
}
