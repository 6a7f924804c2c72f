//! Sitemap generation.
//!
//! A pure function of the current service catalog: the static route list
//! plus one entry per slugged service page.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;
use std::fmt::Write;

use chancery_content::ServiceSummary;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Static routes with their change frequency and priority.
const STATIC_ROUTES: &[(&str, &str, &str)] = &[
    ("/", "weekly", "1.0"),
    ("/about", "monthly", "0.8"),
    ("/services", "weekly", "0.9"),
    ("/contact", "monthly", "0.7"),
    ("/privacy-security", "yearly", "0.3"),
    ("/terms-conditions", "yearly", "0.3"),
    ("/complaints-procedure", "yearly", "0.3"),
];

/// Change frequency and priority for service detail pages.
const SERVICE_CHANGEFREQ: &str = "monthly";
const SERVICE_PRIORITY: &str = "0.8";

/// Build the sitemap XML for the current service catalog.
#[must_use]
pub fn sitemap_xml(base_url: &str, services: &[ServiceSummary]) -> String {
    let base_url = base_url.trim_end_matches('/');
    let lastmod = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let mut xml = String::with_capacity(4096);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NS}\">");

    for (route, changefreq, priority) in STATIC_ROUTES {
        url_entry(
            &mut xml,
            &format!("{base_url}{route}"),
            &lastmod,
            changefreq,
            priority,
        );
    }

    for service in services {
        if service.slug.current.is_empty() {
            continue;
        }
        url_entry(
            &mut xml,
            &format!("{base_url}/services/{}", service.slug.current),
            &lastmod,
            SERVICE_CHANGEFREQ,
            SERVICE_PRIORITY,
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn url_entry(xml: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    xml.push_str("  <url>\n    <loc>");
    xml.push_str(&escape_xml(loc));
    xml.push_str("</loc>\n");
    let _ = writeln!(xml, "    <lastmod>{lastmod}</lastmod>");
    let _ = writeln!(xml, "    <changefreq>{changefreq}</changefreq>");
    let _ = writeln!(xml, "    <priority>{priority}</priority>");
    xml.push_str("  </url>\n");
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chancery_content::Slug;
    use pretty_assertions::assert_eq;

    fn service(slug: &str) -> ServiceSummary {
        ServiceSummary {
            slug: Slug {
                current: slug.to_owned(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_static_routes_present() {
        let xml = sitemap_xml("https://example-firm.co.uk", &[]);
        assert!(xml.contains("<loc>https://example-firm.co.uk/</loc>"));
        assert!(xml.contains("<loc>https://example-firm.co.uk/about</loc>"));
        assert!(xml.contains("<loc>https://example-firm.co.uk/complaints-procedure</loc>"));
        assert_eq!(xml.matches("<url>").count(), STATIC_ROUTES.len());
    }

    #[test]
    fn test_service_routes_appended() {
        let xml = sitemap_xml(
            "https://example-firm.co.uk",
            &[service("family-law"), service("litigation")],
        );
        assert!(xml.contains("<loc>https://example-firm.co.uk/services/family-law</loc>"));
        assert!(xml.contains("<loc>https://example-firm.co.uk/services/litigation</loc>"));
        assert_eq!(xml.matches("<url>").count(), STATIC_ROUTES.len() + 2);
    }

    #[test]
    fn test_empty_slugs_skipped() {
        let xml = sitemap_xml("https://example-firm.co.uk", &[service("")]);
        assert_eq!(xml.matches("<url>").count(), STATIC_ROUTES.len());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let xml = sitemap_xml("https://example-firm.co.uk/", &[]);
        assert!(xml.contains("<loc>https://example-firm.co.uk/about</loc>"));
        assert!(!xml.contains("co.uk//about"));
    }

    #[test]
    fn test_priorities_match_route_importance() {
        let xml = sitemap_xml("https://example-firm.co.uk", &[service("a")]);
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.3</priority>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
    }

    #[test]
    fn test_xml_declaration_and_namespace() {
        let xml = sitemap_xml("https://example-firm.co.uk", &[]);
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].contains(SITEMAP_NS));
        assert_eq!(*lines.last().unwrap(), "</urlset>");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
    }
}
