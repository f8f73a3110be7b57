//! Command-line interface module.

mod args;
pub mod check;
pub mod render;

pub use args::{Cli, Commands, RenderArgs};

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use crate::config::find_config_file;

/// Locate the config file named on the command line.
fn locate_config(name: &Path) -> Result<PathBuf> {
    find_config_file(name).ok_or_else(|| {
        anyhow!(
            "config file `{}` not found in the current directory or any parent",
            name.display()
        )
    })
}
