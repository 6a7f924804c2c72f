//! Per-route page bodies.
//!
//! Each module assembles the `<main>` content for one route family. The
//! shared layout (head, header, footer) wraps these in
//! [`crate::layout::document`].

pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod home;
pub(crate) mod legal;
pub(crate) mod services;

use std::fmt::Write;

use chancery_richtext::escape_html;

/// Width requested for body images (hero and rich-text illustrations).
pub(crate) const BODY_IMAGE_WIDTH: u32 = 800;

/// Visible placeholder for a section whose upstream content is missing.
///
/// Upstream failures and unpublished documents degrade to this state; they
/// never 500.
pub(crate) fn content_missing(what: &str, out: &mut String) {
    let _ = write!(
        out,
        r#"<section class="content-missing"><h2>{}</h2><p>This content is currently unavailable. Please check back soon.</p></section>"#,
        escape_html(what)
    );
}

/// Body of the 404 page.
pub(crate) fn not_found() -> String {
    r#"<section class="not-found"><h1>Page Not Found</h1><p>The page you are looking for does not exist or has been moved.</p><p><a href="/">Return to the home page</a></p></section>"#
        .to_owned()
}
