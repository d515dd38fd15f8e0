// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{require_file, settings};
use crate::config::Config;
use crate::ops;
use anyhow::{Context, Result};

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let settings = settings(cfg, m);
    let path = require_file(&settings)?;
    tracing::debug!(path = %path.display(), "creating data file");
    ops::init(path).with_context(|| format!("Cannot create {}", path.display()))?;
    if settings.verbose {
        println!("biclog: created file {}.", path.display());
    }
    Ok(())
}
