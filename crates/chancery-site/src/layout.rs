//! Shared document shell: head, header and footer around every page.

use std::fmt::Write;

use chancery_content::{NavLink, ServiceSummary, SiteSettings};
use chancery_richtext::escape_html;

use crate::renderer::SiteRenderer;
use crate::seo::PageMeta;

/// Navigation shown when the settings document has none.
fn default_nav() -> Vec<NavLink> {
    [
        ("Home", "/"),
        ("About", "/about"),
        ("Services", "/services"),
        ("Contact", "/contact"),
    ]
    .into_iter()
    .map(|(title, url)| NavLink {
        title: title.to_owned(),
        url: url.to_owned(),
        external: false,
    })
    .collect()
}

/// Assemble a complete HTML document around a page body.
pub(crate) fn document(
    renderer: &SiteRenderer,
    settings: Option<&SiteSettings>,
    services: &[ServiceSummary],
    meta: &PageMeta,
    body: &str,
) -> String {
    let mut out = String::with_capacity(body.len() + 4096);

    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    head(renderer, meta, &mut out);
    out.push_str("</head>\n<body>\n");
    header(renderer, settings, &mut out);
    out.push_str("<main>\n");
    out.push_str(body);
    out.push_str("</main>\n");
    footer(renderer, settings, services, &mut out);
    out.push_str("</body>\n</html>\n");

    out
}

fn head(renderer: &SiteRenderer, meta: &PageMeta, out: &mut String) {
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");

    let _ = writeln!(out, "<title>{}</title>", escape_html(&meta.title));
    let _ = writeln!(
        out,
        r#"<meta name="description" content="{}">"#,
        escape_html(&meta.description)
    );
    let _ = writeln!(
        out,
        r#"<meta name="keywords" content="{}">"#,
        escape_html(&meta.keywords)
    );

    let robots = if meta.no_index {
        "noindex, nofollow"
    } else {
        "index, follow"
    };
    let _ = writeln!(out, r#"<meta name="robots" content="{robots}">"#);

    let _ = writeln!(
        out,
        r#"<meta property="og:title" content="{}">"#,
        escape_html(&meta.title)
    );
    let _ = writeln!(
        out,
        r#"<meta property="og:description" content="{}">"#,
        escape_html(&meta.description)
    );
    out.push_str("<meta property=\"og:type\" content=\"website\">\n");
    let _ = writeln!(
        out,
        r#"<meta property="og:url" content="{}">"#,
        escape_html(&renderer.base_url)
    );
    if let Some(og_image) = &meta.og_image {
        let _ = writeln!(
            out,
            r#"<meta property="og:image" content="{}">"#,
            escape_html(og_image)
        );
    }

    let favicon = meta.favicon.as_deref().unwrap_or("/favicon.ico");
    let _ = writeln!(out, r#"<link rel="icon" href="{}">"#, escape_html(favicon));
    out.push_str("<link rel=\"stylesheet\" href=\"/assets/site.css\">\n");
}

fn header(renderer: &SiteRenderer, settings: Option<&SiteSettings>, out: &mut String) {
    let contact = settings.and_then(|s| s.contact_info.as_ref());

    // Contact strip above the main navigation
    out.push_str("<div class=\"top-bar\">");
    if let Some(phone) = contact.and_then(|c| c.phone.as_deref()) {
        let _ = write!(
            out,
            r#"<a href="tel:{}">{}</a>"#,
            escape_html(&phone.replace(' ', "")),
            escape_html(phone)
        );
    }
    if let Some(email) = contact.and_then(|c| c.email.as_deref()) {
        let _ = write!(
            out,
            r#"<a href="mailto:{}">{}</a>"#,
            escape_html(email),
            escape_html(email)
        );
    }
    out.push_str("</div>\n");

    out.push_str("<header class=\"site-header\">\n");
    let _ = write!(
        out,
        r#"<a class="brand" href="/">{}</a>"#,
        escape_html(&renderer.site_title(settings))
    );

    out.push_str("<nav aria-label=\"Main\"><ul>");
    let nav = settings
        .map(|s| s.navigation.clone())
        .filter(|nav| !nav.is_empty())
        .unwrap_or_else(default_nav);
    for link in &nav {
        if link.external {
            let _ = write!(
                out,
                r#"<li><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                escape_html(&link.url),
                escape_html(&link.title)
            );
        } else {
            let _ = write!(
                out,
                r#"<li><a href="{}">{}</a></li>"#,
                escape_html(&link.url),
                escape_html(&link.title)
            );
        }
    }
    out.push_str("</ul></nav>\n</header>\n");
}

fn footer(
    renderer: &SiteRenderer,
    settings: Option<&SiteSettings>,
    services: &[ServiceSummary],
    out: &mut String,
) {
    out.push_str("<footer class=\"site-footer\">\n");

    // Firm blurb
    out.push_str("<section class=\"footer-about\">");
    let _ = write!(
        out,
        "<h2>{}</h2>",
        escape_html(&renderer.site_title(settings))
    );
    if let Some(footer_text) = settings.and_then(|s| s.footer_text.as_deref()) {
        out.push_str(&renderer.richtext.render(footer_text));
    } else {
        let description = settings.and_then(|s| s.description.as_deref()).unwrap_or(
            "Providing exceptional legal services with integrity, expertise, and personal \
             attention.",
        );
        let _ = write!(out, "<p>{}</p>", escape_html(description));
    }
    out.push_str("</section>\n");

    // Practice areas
    out.push_str("<section class=\"footer-services\"><h3>Our Services</h3><ul>");
    for service in services {
        let _ = write!(
            out,
            r#"<li><a href="/services/{}">{}</a></li>"#,
            escape_html(&service.slug.current),
            escape_html(&service.title)
        );
    }
    let _ = write!(out, r#"<li><a href="/services">View All Services</a></li>"#);
    out.push_str("</ul></section>\n");

    // Legal notices
    out.push_str("<section class=\"footer-legal\"><h3>Legal</h3><ul>");
    for (title, route) in [
        ("Privacy &amp; Security", "/privacy-security"),
        ("Terms &amp; Conditions", "/terms-conditions"),
        ("Complaints Procedure", "/complaints-procedure"),
    ] {
        let _ = write!(out, r#"<li><a href="{route}">{title}</a></li>"#);
    }
    out.push_str("</ul></section>\n");

    // Social profiles
    if let Some(social) = settings.and_then(|s| s.social_media.as_ref()) {
        let links = [
            ("LinkedIn", social.linkedin.as_deref()),
            ("Twitter", social.twitter.as_deref()),
            ("Facebook", social.facebook.as_deref()),
            ("Instagram", social.instagram.as_deref()),
            ("YouTube", social.youtube.as_deref()),
        ];
        if links.iter().any(|(_, url)| url.is_some()) {
            out.push_str("<section class=\"footer-social\"><ul>");
            for (name, url) in links {
                if let Some(url) = url {
                    let _ = write!(
                        out,
                        r#"<li><a href="{}" target="_blank" rel="noopener noreferrer">{name}</a></li>"#,
                        escape_html(url)
                    );
                }
            }
            out.push_str("</ul></section>\n");
        }
    }

    let year = chrono::Utc::now().format("%Y");
    let _ = writeln!(
        out,
        r#"<p class="copyright">&copy; {year} {}. All rights reserved.</p>"#,
        escape_html(&renderer.site_title(settings))
    );
    out.push_str("</footer>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chancery_content::{ContactInfo, MediaUrlBuilder};

    fn renderer() -> SiteRenderer {
        SiteRenderer::new(
            MediaUrlBuilder::new("https://cdn.sanity.io", "test", "production"),
            "https://example-firm.co.uk",
            "Example Firm",
        )
    }

    fn full_page(settings: Option<&SiteSettings>) -> String {
        let renderer = renderer();
        let meta = PageMeta::for_site(&renderer, settings);
        document(&renderer, settings, &[], &meta, "<p>body</p>")
    }

    #[test]
    fn test_document_structure() {
        let html = full_page(None);
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<main>\n<p>body</p></main>"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_default_navigation_when_settings_missing() {
        let html = full_page(None);
        for link in ["/about", "/services", "/contact"] {
            assert!(html.contains(&format!(r#"href="{link}""#)), "{link} missing");
        }
    }

    #[test]
    fn test_settings_navigation_overrides_default() {
        let settings = SiteSettings {
            navigation: vec![NavLink {
                title: "Team".to_owned(),
                url: "/team".to_owned(),
                external: false,
            }],
            ..Default::default()
        };
        let html = full_page(Some(&settings));
        assert!(html.contains(r#"<li><a href="/team">Team</a></li>"#));
        assert!(!html.contains(r#"<li><a href="/about">About</a></li>"#));
    }

    #[test]
    fn test_contact_strip_renders_phone_and_email() {
        let settings = SiteSettings {
            contact_info: Some(ContactInfo {
                phone: Some("+44 20 7123 4567".to_owned()),
                email: Some("info@example-firm.co.uk".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let html = full_page(Some(&settings));
        assert!(html.contains(r#"href="tel:+442071234567""#));
        assert!(html.contains(r#"href="mailto:info@example-firm.co.uk""#));
    }

    #[test]
    fn test_footer_lists_services() {
        let renderer = renderer();
        let meta = PageMeta::for_site(&renderer, None);
        let services = vec![ServiceSummary {
            title: "Family Law".to_owned(),
            slug: chancery_content::Slug {
                current: "family-law".to_owned(),
            },
            ..Default::default()
        }];
        let html = document(&renderer, None, &services, &meta, "");
        assert!(html.contains(r#"<a href="/services/family-law">Family Law</a>"#));
    }

    #[test]
    fn test_head_escapes_metadata() {
        let settings = SiteSettings {
            title: Some(r#"Smith & "Partners""#.to_owned()),
            ..Default::default()
        };
        let html = full_page(Some(&settings));
        assert!(html.contains("<title>Smith &amp; &quot;Partners&quot;</title>"));
    }

    #[test]
    fn test_legal_links_always_present() {
        let html = full_page(None);
        assert!(html.contains("/privacy-security"));
        assert!(html.contains("/terms-conditions"));
        assert!(html.contains("/complaints-procedure"));
    }
}
