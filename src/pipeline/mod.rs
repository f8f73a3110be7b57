//! Post-render HTML processing.
//!
//! The SEO block is produced as a string; this module places it into an
//! already rendered document.

mod head;

pub use head::inject_head;
