//! Tag names → keyword string.

use crate::debug;
use crate::store::{Tag, TagStore};

/// Resolve tag identifiers into `"Name1,Name2"`.
///
/// Tags are ordered by identifier, not by input order. A tag without a
/// display name contributes its identifier. Lookup failures and empty
/// results resolve to `""`; this never fails. An empty input returns
/// immediately without touching the store.
pub async fn resolve_tags(store: &dyn TagStore, names: &[String]) -> String {
    if names.is_empty() {
        return String::new();
    }

    match store.list_tags(names).await {
        Ok(mut tags) => {
            tags.sort_by(|a, b| a.name.cmp(&b.name));
            tags.iter().map(Tag::label).collect::<Vec<_>>().join(",")
        }
        Err(e) => {
            debug!("seo"; "tag lookup failed, no keywords from tags: {}", e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed list in whatever order it was given.
    struct FixedTags {
        tags: Vec<Tag>,
        calls: AtomicUsize,
    }

    impl FixedTags {
        fn new(tags: &[(&str, Option<&str>)]) -> Self {
            Self {
                tags: tags
                    .iter()
                    .map(|(name, display)| Tag {
                        name: (*name).into(),
                        display_name: display.map(Into::into),
                    })
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TagStore for FixedTags {
        async fn list_tags(&self, _names: &[String]) -> Result<Vec<Tag>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.tags.clone())
        }
    }

    struct BrokenTags;

    #[async_trait]
    impl TagStore for BrokenTags {
        async fn list_tags(&self, _names: &[String]) -> Result<Vec<Tag>, StoreError> {
            Err(StoreError::Unavailable("index offline".into()))
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_input_skips_store() {
        let store = FixedTags::new(&[("t1", Some("Alpha"))]);
        assert_eq!(resolve_tags(&store, &[]).await, "");
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_sorted_by_identifier() {
        let store = FixedTags::new(&[("t2", Some("Beta")), ("t1", Some("Alpha"))]);
        assert_eq!(resolve_tags(&store, &names(&["t2", "t1"])).await, "Alpha,Beta");
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_display_name_uses_identifier() {
        let store = FixedTags::new(&[("rust", None), ("async", Some("Async"))]);
        assert_eq!(resolve_tags(&store, &names(&["rust", "async"])).await, "Async,rust");
    }

    #[tokio::test]
    async fn test_empty_result() {
        let store = FixedTags::new(&[]);
        assert_eq!(resolve_tags(&store, &names(&["gone"])).await, "");
    }

    #[tokio::test]
    async fn test_failure_degrades_to_empty() {
        assert_eq!(resolve_tags(&BrokenTags, &names(&["t1"])).await, "");
    }
}
