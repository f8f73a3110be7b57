//! `timefactor render`: one post, one head block.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use super::{Cli, RenderArgs, locate_config};
use crate::config::ConfigHandle;
use crate::core::SiteLinkProcessor;
use crate::log;
use crate::pipeline::inject_head;
use crate::seo::{Collaborators, PageContext, TimeFactorProcessor};
use crate::store::{ConfigStore, MemoryStore};

/// Render the SEO block for `args.name`, then print it or inject it into a page.
pub fn render_post(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let config_path = locate_config(&cli.config)?;
    let handle = Arc::new(ConfigHandle::load(&config_path)?);
    let store = Arc::new(
        MemoryStore::load(&args.data)
            .with_context(|| format!("failed to load content data `{}`", args.data.display()))?,
    );

    let processor = build_processor(handle, store);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;
    let block = rt.block_on(processor.process(&PageContext::for_post(args.name.as_str())));

    if block.is_empty() {
        log!("render"; "nothing to render for `{}`", args.name);
    }

    let output = match &args.inject {
        Some(page) => {
            let html = fs::read_to_string(page)
                .with_context(|| format!("failed to read `{}`", page.display()))?;
            inject_head(&html, &block).into_owned()
        }
        None => block,
    };

    write_output(args.output.as_deref(), &output)
}

/// Wire the config-backed stores and the content store into a processor.
fn build_processor(handle: Arc<ConfigHandle>, store: Arc<MemoryStore>) -> TimeFactorProcessor {
    let config = handle.current();
    let settings = Arc::new(ConfigStore::new(handle.clone()));

    let stores = Collaborators {
        content: store.clone(),
        users: store.clone(),
        tags: store,
        settings: settings.clone(),
        system: settings,
        links: Arc::new(SiteLinkProcessor::new(config.site.url.as_deref())),
    };

    TimeFactorProcessor::new(stores)
        .with_zone(config.render.zone())
        .with_timeout(config.render.timeout())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            log!("render"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
