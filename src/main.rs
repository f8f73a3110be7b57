//! Timefactor - SEO time-factor metadata for blog post pages.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use timefactor::cli::{self, Cli, Commands};
use timefactor::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Render { args } => cli::render::render_post(&cli, args),
        Commands::Check => cli::check::check_config(&cli),
    }
}
