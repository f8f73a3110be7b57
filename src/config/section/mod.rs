//! Configuration section definitions.
//!
//! Each module corresponds to a section in `timefactor.toml`:
//!
//! | Module   | TOML Section | Purpose                                     |
//! |----------|--------------|---------------------------------------------|
//! | `site`   | `[site]`     | Site title, logo, keywords, external URL    |
//! | `seo`    | `[seo]`      | Feature flags and default cover image       |
//! | `render` | `[render]`   | Time zone and render timeout                |

mod render;
mod seo;
mod site;

pub use render::RenderConfig;
pub use seo::BasicConfig;
pub use site::SiteInfoConfig;
