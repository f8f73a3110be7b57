//! SEO head block for post pages.
//!
//! ```text
//! PageContext ─► content name ─► fetch post
//!                                    │
//!        ┌──────────────┬────────────┼─────────────┐
//!        ▼              ▼            ▼             ▼
//!     author          tags       settings     system info      (joined)
//!        └──────────────┴─────┬──────┴─────────────┘
//!                             ▼
//!                          SeoMeta ─► select_fragments ─► concatenated block
//! ```
//!
//! Fragments are emitted in a fixed order (canonical, Open Graph, Bytedance
//! meta, Baidu script, schema.org script), each gated by one `[seo]` flag.
//! Lookup failures never surface: the post-level ones skip the block, the
//! secondary ones fall back to defaults.

mod fragment;
mod jsonld;
mod meta;
mod og;
mod processor;
mod tags;


pub use fragment::{FragmentKind, canonical_link, render_fragments, select_fragments};
pub use meta::{Lookup, SeoMeta, Sources};
pub use processor::{AggregateError, Collaborators, NAME_VARIABLE, PageContext, TimeFactorProcessor};
pub use tags::resolve_tags;
