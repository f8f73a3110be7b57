//! The head-render hook: page context in, SEO block out.

use std::sync::Arc;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde_json::Value;
use smallvec::SmallVec;
use thiserror::Error;

use super::fragment::{render_fragments, select_fragments};
use super::meta::{Lookup, SeoMeta, Sources};
use super::tags::resolve_tags;
use crate::config::BasicConfig;
use crate::core::LinkProcessor;
use crate::debug;
use crate::store::{
    ContentStore, SettingsStore, StoreError, SystemInfo, SystemInfoProvider, TagStore, UserStore,
};
use crate::utils::date::RenderZone;

/// Template variable holding the content identifier.
pub const NAME_VARIABLE: &str = "name";

/// Variables visible to the template being rendered.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    variables: FxHashMap<String, Value>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a post page.
    pub fn for_post(name: impl Into<String>) -> Self {
        Self::new().with_variable(NAME_VARIABLE, Value::String(name.into()))
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: Value) -> Self {
        self.variables.insert(key.into(), value);
        self
    }

    pub fn variable(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    /// The content identifier, if present and non-empty.
    ///
    /// Strings are taken as-is; numbers and booleans use their display form.
    /// Null, arrays and objects are not identifiers.
    pub fn content_name(&self) -> Option<String> {
        let name = match self.variable(NAME_VARIABLE)? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => return None,
        };
        (!name.is_empty()).then_some(name)
    }
}

/// Why no metadata record could be built. The hook maps all of these to an
/// empty block.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("no content identifier")]
    MissingId,

    #[error("post `{0}` not found")]
    NotFound(String),

    #[error("failed to fetch post `{0}`")]
    Content(String, #[source] StoreError),
}

/// Everything the processor reads from.
#[derive(Clone)]
pub struct Collaborators {
    pub content: Arc<dyn ContentStore>,
    pub users: Arc<dyn UserStore>,
    pub tags: Arc<dyn TagStore>,
    pub settings: Arc<dyn SettingsStore>,
    pub system: Arc<dyn SystemInfoProvider>,
    pub links: Arc<dyn LinkProcessor>,
}

/// Renders the SEO head block for post pages.
///
/// Each call is independent: no state is shared between renders apart from
/// the read-only collaborators.
#[derive(Clone)]
pub struct TimeFactorProcessor {
    stores: Collaborators,
    zone: RenderZone,
    timeout: Option<Duration>,
}

impl TimeFactorProcessor {
    pub fn new(stores: Collaborators) -> Self {
        Self {
            stores,
            zone: RenderZone::Local,
            timeout: None,
        }
    }

    /// Time zone used for both date formats.
    pub fn with_zone(mut self, zone: RenderZone) -> Self {
        self.zone = zone;
        self
    }

    /// Upper bound for one render. `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Hook entry point.
    ///
    /// Never fails: a missing identifier, an unknown post or an expired
    /// timeout all produce an empty string. On expiry the in-flight lookups
    /// are dropped.
    pub async fn process(&self, page: &PageContext) -> String {
        let Some(name) = page.content_name() else {
            debug!("seo"; "skip: {}", AggregateError::MissingId);
            return String::new();
        };

        let Some(limit) = self.timeout else {
            return self.render(&name).await;
        };

        match tokio::time::timeout(limit, self.render(&name)).await {
            Ok(block) => block,
            Err(_) => {
                debug!("seo"; "skip `{}`: render exceeded {}ms", name, limit.as_millis());
                String::new()
            }
        }
    }

    /// Render the enabled fragments for one post.
    pub async fn render(&self, name: &str) -> String {
        let (meta, config) = match self.collect(name).await {
            Ok(found) => found,
            Err(e) => {
                debug!("seo"; "skip: {}", e);
                return String::new();
            }
        };

        let kinds = select_fragments(&config);
        render_fragments(&kinds, &meta)
    }

    /// Build the metadata record for one post.
    pub async fn aggregate(&self, name: &str) -> Result<SeoMeta, AggregateError> {
        self.collect(name).await.map(|(meta, _)| meta)
    }

    /// Fetch the post, then join the four secondary lookups.
    ///
    /// Settings are returned alongside the record so the gate reuses the
    /// same snapshot.
    async fn collect(&self, name: &str) -> Result<(SeoMeta, BasicConfig), AggregateError> {
        if name.is_empty() {
            return Err(AggregateError::MissingId);
        }

        let post = self
            .stores
            .content
            .fetch_post(name)
            .await
            .map_err(|e| AggregateError::Content(name.to_owned(), e))?
            .ok_or_else(|| AggregateError::NotFound(name.to_owned()))?;

        let (author, tag_keywords, config, system) = tokio::join!(
            self.author(&post.owner),
            resolve_tags(self.stores.tags.as_ref(), &post.tags),
            self.settings(),
            self.system_info(),
        );

        let degraded: SmallVec<[&str; 3]> = [
            ("author", author.is_fallback()),
            ("settings", config.is_fallback()),
            ("system info", system.is_fallback()),
        ]
        .into_iter()
        .filter_map(|(source, fell_back)| fell_back.then_some(source))
        .collect();
        if !degraded.is_empty() {
            debug!("seo"; "`{}` rendered with defaults for {}", name, degraded.join(", "));
        }

        let (config, system) = (config.into_inner(), system.into_inner());
        let meta = SeoMeta::assemble(
            Sources {
                post: &post,
                author: author.into_inner(),
                tag_keywords,
                config: &config,
                system: &system,
            },
            self.stores.links.as_ref(),
            self.zone,
        );

        Ok((meta, config))
    }

    /// Display name of the owner, or the owner id itself.
    async fn author(&self, owner: &str) -> Lookup<String> {
        match self.stores.users.fetch_user(owner).await {
            Ok(Some(user)) => match user.display_name {
                Some(display) if !display.trim().is_empty() => Lookup::Hit(display),
                _ => Lookup::Fallback(owner.to_owned()),
            },
            Ok(None) => {
                debug!("seo"; "user `{}` not found, author falls back to id", owner);
                Lookup::Fallback(owner.to_owned())
            }
            Err(e) => {
                debug!("seo"; "user lookup failed, author falls back to id: {}", e);
                Lookup::Fallback(owner.to_owned())
            }
        }
    }

    async fn settings(&self) -> Lookup<BasicConfig> {
        match self.stores.settings.basic_config().await {
            Ok(Some(config)) => Lookup::Hit(config),
            Ok(None) => Lookup::Fallback(BasicConfig::default()),
            Err(e) => {
                debug!("seo"; "settings unavailable, all fragments disabled: {}", e);
                Lookup::Fallback(BasicConfig::default())
            }
        }
    }

    async fn system_info(&self) -> Lookup<SystemInfo> {
        match self.stores.system.system_info().await {
            Ok(info) => Lookup::Hit(info),
            Err(e) => {
                debug!("seo"; "system info unavailable: {}", e);
                Lookup::Fallback(SystemInfo::default())
            }
        }
    }
}
