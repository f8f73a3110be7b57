//! Core types shared across the codebase.

mod link;

pub use link::{LinkKind, LinkProcessor, SiteLinkProcessor, is_external_link};
