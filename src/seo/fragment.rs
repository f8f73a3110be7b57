//! Config gate: which fragments to emit, and in what order.

use smallvec::SmallVec;

use super::{SeoMeta, jsonld, og};
use crate::config::BasicConfig;
use crate::utils::html::escape_attr;

/// One kind of head fragment.
///
/// Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    CanonicalLink,
    OpenGraph,
    SearchMeta,
    BaiduScript,
    StructuredData,
}

impl FragmentKind {
    /// All kinds in output order.
    pub const ALL: [Self; 5] = [
        Self::CanonicalLink,
        Self::OpenGraph,
        Self::SearchMeta,
        Self::BaiduScript,
        Self::StructuredData,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::CanonicalLink => "canonical",
            Self::OpenGraph => "og",
            Self::SearchMeta => "meta",
            Self::BaiduScript => "baidu",
            Self::StructuredData => "structured-data",
        }
    }

    /// Whether the flag for this kind is set.
    pub fn is_enabled(self, config: &BasicConfig) -> bool {
        match self {
            Self::CanonicalLink => config.enable_canonical_link,
            Self::OpenGraph => config.enable_og_time_factor,
            Self::SearchMeta => config.enable_meta_time_factor,
            Self::BaiduScript => config.enable_baidu_time_factor,
            Self::StructuredData => config.enable_structured_data,
        }
    }

    /// Render this fragment. Pure; the same record always yields the same bytes.
    pub fn render(self, meta: &SeoMeta) -> String {
        match self {
            Self::CanonicalLink => canonical_link(meta),
            Self::OpenGraph => og::open_graph(meta),
            Self::SearchMeta => og::bytedance(meta),
            Self::BaiduScript => jsonld::baidu(meta),
            Self::StructuredData => jsonld::blog_posting(meta),
        }
    }
}

/// `<link rel="canonical">` for the post URL.
pub fn canonical_link(meta: &SeoMeta) -> String {
    format!(
        "<link rel=\"canonical\" href=\"{}\" />\n",
        escape_attr(&meta.post_url)
    )
}

/// Enabled kinds, in output order.
pub fn select_fragments(config: &BasicConfig) -> SmallVec<[FragmentKind; 5]> {
    FragmentKind::ALL
        .into_iter()
        .filter(|kind| kind.is_enabled(config))
        .collect()
}

/// Concatenate the selected fragments.
pub fn render_fragments(kinds: &[FragmentKind], meta: &SeoMeta) -> String {
    let mut out = String::with_capacity(kinds.len() * 512);
    for kind in kinds {
        out.push_str(&kind.render(meta));
    }
    out
}
