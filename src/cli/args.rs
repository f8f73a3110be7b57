//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Render SEO time-factor metadata for blog posts
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "timefactor.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the SEO head block for one post
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Validate the config file and report diagnostics
    #[command(visible_alias = "c")]
    Check,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Post name (content identifier)
    pub name: String,

    /// Content data file with posts, users and tags
    #[arg(short, long, default_value = "content.json", value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Rendered HTML page to inject the block into, before `</head>`
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub inject: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "timefactor",
            "render",
            "post-1",
            "--data",
            "posts.json",
            "-i",
            "page.html",
        ])
        .unwrap();

        let Commands::Render { args } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.name, "post-1");
        assert_eq!(args.data, PathBuf::from("posts.json"));
        assert_eq!(args.inject, Some(PathBuf::from("page.html")));
        assert!(args.output.is_none());
        assert_eq!(cli.config, PathBuf::from("timefactor.toml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["timefactor", "check", "-C", "site.toml", "--verbose"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_render_requires_name() {
        assert!(Cli::try_parse_from(["timefactor", "render"]).is_err());
    }
}
