//! Timefactor - SEO time-factor metadata for blog post pages.
//!
//! Renders canonical links, Open Graph and Bytedance meta tags, and Baidu /
//! schema.org JSON-LD scripts for a post, gated by `[seo]` feature flags.
//! The entry point is [`seo::TimeFactorProcessor::process`]; the CLI in
//! `main.rs` wires it to a `timefactor.toml` config and a JSON content file.

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod pipeline;
pub mod seo;
pub mod store;
pub mod utils;
