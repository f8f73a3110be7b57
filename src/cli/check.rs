//! `timefactor check`: validate the config file.

use anyhow::{Result, bail};

use super::{Cli, locate_config};
use crate::config::SiteConfig;
use crate::log;
use crate::seo::select_fragments;

/// Load the config, print every diagnostic, and fail if any is an error.
pub fn check_config(cli: &Cli) -> Result<()> {
    let path = locate_config(&cli.config)?;
    let config = SiteConfig::from_path(&path)?;
    let diag = config.diagnostics();

    diag.print_warnings();
    if diag.has_errors() {
        for error in diag.errors() {
            eprintln!("{error}");
        }
        bail!("{} has {} error(s)", path.display(), diag.errors().len());
    }

    let enabled: Vec<_> = select_fragments(&config.seo_or_default())
        .iter()
        .map(|kind| kind.name())
        .collect();

    log!("check"; "{} is valid", path.display());
    if enabled.is_empty() {
        log!("check"; "no fragments enabled, rendering produces nothing");
    } else {
        log!("check"; "enabled fragments: {}", enabled.join(", "));
    }
    Ok(())
}
