//! Page assembly for Chancery.
//!
//! Turns Content Store documents into complete HTML pages. The crate is
//! deliberately free of I/O: every function here is a pure transformation
//! from typed content to markup, which keeps page rendering trivially
//! testable and cacheable.
//!
//! - [`SiteRenderer`]: one method per route, wrapping page bodies in the
//!   shared layout with SEO metadata and fallback chains
//! - [`resolve_icon`]: three-tier icon resolution (curated set, catalog,
//!   default), total over arbitrary input
//! - [`sitemap_xml`] / [`robots_txt`]: derived listings, pure functions of
//!   the service catalog and site settings
//!
//! Missing content never fails a render: pages degrade to a visible
//! "content unavailable" state section by section.

mod icons;
mod layout;
mod pages;
mod renderer;
mod robots;
mod seo;
mod sitemap;

pub use icons::resolve_icon;
pub use renderer::SiteRenderer;
pub use robots::robots_txt;
pub use sitemap::sitemap_xml;
