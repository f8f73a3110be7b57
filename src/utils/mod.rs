//! Shared helpers: escaping, date formatting, hashing.

pub mod date;
pub mod hash;
pub mod html;
