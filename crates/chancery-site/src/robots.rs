//! robots.txt generation.

use std::fmt::Write;

/// Build the robots.txt body.
///
/// When the site settings mark the whole site no-index, everything is
/// disallowed; otherwise crawlers get the standard allow list with the
/// sitemap location.
#[must_use]
pub fn robots_txt(base_url: &str, no_index: bool) -> String {
    if no_index {
        return "User-agent: *\nDisallow: /\n".to_owned();
    }

    let base_url = base_url.trim_end_matches('/');
    let mut out = String::with_capacity(512);

    out.push_str("User-agent: *\nAllow: /\n\n");
    let _ = writeln!(out, "# Sitemaps\nSitemap: {base_url}/sitemap.xml");
    out.push_str("\n# Crawl-delay for respectful crawling\nCrawl-delay: 1\n");
    out.push_str("\n# Disallow admin and private areas\n");
    for path in ["/admin/", "/api/", "/.well-known/"] {
        let _ = writeln!(out, "Disallow: {path}");
    }
    out.push_str("\n# Allow important pages\n");
    for path in ["/", "/about", "/services", "/contact"] {
        let _ = writeln!(out, "Allow: {path}");
    }

    out
}
