//! Services listing and service detail bodies.

use std::fmt::Write;

use chancery_content::{Service, ServiceSummary, SiteSettings};
use chancery_richtext::escape_html;

use crate::icons::resolve_icon;
use crate::renderer::SiteRenderer;

/// Default listing header copy.
const DEFAULT_TITLE: &str = "Our Practice Areas";
const DEFAULT_INTRO: &str = "We provide comprehensive legal services across multiple practice \
                             areas, delivering expert advice and exceptional results for our \
                             clients.";

/// One service card, shared by the listing page and the home-page grid.
pub(crate) fn service_card(service: &ServiceSummary, out: &mut String) {
    out.push_str("<article class=\"service-card\">");
    out.push_str(resolve_icon(service.icon.as_deref().unwrap_or_default()));
    let _ = write!(out, "<h3>{}</h3>", escape_html(&service.title));
    if let Some(description) = &service.short_description {
        let _ = write!(out, "<p>{}</p>", escape_html(description));
    }
    let _ = write!(
        out,
        r#"<a class="learn-more" href="/services/{}">Learn More</a>"#,
        escape_html(&service.slug.current)
    );
    out.push_str("</article>");
}

/// The `/services` listing body.
pub(crate) fn render_listing(
    settings: Option<&SiteSettings>,
    services: &[ServiceSummary],
) -> String {
    let info = settings.and_then(|s| s.service_info.as_ref());
    let title = info
        .and_then(|i| i.service_page_title.as_deref())
        .unwrap_or(DEFAULT_TITLE);
    let intro = info
        .and_then(|i| i.service_page_description.as_deref())
        .unwrap_or(DEFAULT_INTRO);

    let mut out = String::with_capacity(2048);
    out.push_str("<section class=\"services-listing\">");
    let _ = write!(
        out,
        "<h1>{}</h1><p class=\"intro\">{}</p>",
        escape_html(title),
        escape_html(intro)
    );

    if services.is_empty() {
        super::content_missing("Our Services", &mut out);
    } else {
        out.push_str("<div class=\"services-grid\">");
        for service in services {
            service_card(service, &mut out);
        }
        out.push_str("</div>");
    }

    out.push_str("</section>");
    out
}

/// A `/services/{slug}` detail body.
pub(crate) fn render_detail(renderer: &SiteRenderer, service: &Service) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("<section class=\"service-hero\">");
    out.push_str(r#"<a class="back-link" href="/services">Back to Services</a>"#);
    out.push_str(resolve_icon(service.icon.as_deref().unwrap_or_default()));
    let _ = write!(out, "<h1>{}</h1>", escape_html(&service.title));
    if service.featured {
        out.push_str(r#"<span class="badge">Featured</span>"#);
    }
    if let Some(description) = &service.short_description {
        let _ = write!(out, "<p class=\"lead\">{}</p>", escape_html(description));
    }
    out.push_str("</section>");

    out.push_str("<section class=\"service-body\">");
    let detail = renderer
        .richtext
        .render_opt(service.detailed_description.as_deref());
    if detail.is_empty() {
        super::content_missing(&service.title, &mut out);
    } else {
        let _ = write!(out, "<div class=\"prose\">{detail}</div>");
    }

    if !service.process_steps.is_empty() {
        out.push_str("<h2>Our Process</h2><ol class=\"process-steps\">");
        let mut steps = service.process_steps.clone();
        steps.sort_by_key(|s| s.step);
        for step in &steps {
            let _ = write!(
                out,
                "<li><h3>{}</h3><p>{}</p></li>",
                escape_html(&step.title),
                escape_html(&step.description)
            );
        }
        out.push_str("</ol>");
    }
    out.push_str("</section>");

    out.push_str("<aside class=\"service-sidebar\">");
    if !service.features.is_empty() {
        out.push_str("<section class=\"features\"><h3>Key Features</h3><ul>");
        for feature in &service.features {
            let _ = write!(out, "<li>{}</li>", escape_html(feature));
        }
        out.push_str("</ul></section>");
    }
    if !service.benefits.is_empty() {
        out.push_str("<section class=\"benefits\"><h3>Benefits</h3><ul>");
        for benefit in &service.benefits {
            let _ = write!(out, "<li>{}</li>", escape_html(benefit));
        }
        out.push_str("</ul></section>");
    }
    let _ = write!(
        out,
        r#"<section class="cta"><h3>Need Expert Advice?</h3><p>Contact our experienced team for a consultation about your {} needs.</p><a href="/contact">Get In Touch</a></section>"#,
        escape_html(&service.title.to_lowercase())
    );
    out.push_str("</aside>");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chancery_content::{MediaUrlBuilder, ProcessStep, ServiceInfo, Slug};

    fn renderer() -> SiteRenderer {
        SiteRenderer::new(
            MediaUrlBuilder::new("https://cdn.sanity.io", "test", "production"),
            "https://example-firm.co.uk",
            "Example Firm",
        )
    }

    fn summary(title: &str, slug: &str) -> ServiceSummary {
        ServiceSummary {
            title: title.to_owned(),
            slug: Slug {
                current: slug.to_owned(),
            },
            short_description: Some("Short description.".to_owned()),
            icon: Some("Gavel".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_listing_renders_cards() {
        let html = render_listing(
            None,
            &[summary("Litigation", "litigation"), summary("Family Law", "family-law")],
        );
        assert!(html.contains(DEFAULT_TITLE));
        assert!(html.contains(r#"href="/services/litigation""#));
        assert!(html.contains(r#"href="/services/family-law""#));
        assert_eq!(html.matches("service-card").count(), 2);
    }

    #[test]
    fn test_listing_uses_settings_copy() {
        let settings = SiteSettings {
            service_info: Some(ServiceInfo {
                service_page_title: Some("What We Do".to_owned()),
                service_page_description: None,
            }),
            ..Default::default()
        };
        let html = render_listing(Some(&settings), &[summary("A", "a")]);
        assert!(html.contains("<h1>What We Do</h1>"));
        assert!(html.contains(DEFAULT_INTRO));
    }

    #[test]
    fn test_empty_listing_shows_missing_state() {
        let html = render_listing(None, &[]);
        assert!(html.contains("currently unavailable"));
    }

    #[test]
    fn test_detail_sorts_process_steps() {
        let service = Service {
            title: "Employment Law".to_owned(),
            process_steps: vec![
                ProcessStep {
                    step: 2,
                    title: "Advise".to_owned(),
                    description: String::new(),
                },
                ProcessStep {
                    step: 1,
                    title: "Listen".to_owned(),
                    description: String::new(),
                },
            ],
            ..Default::default()
        };
        let html = render_detail(&renderer(), &service);
        let listen = html.find("Listen").unwrap();
        let advise = html.find("Advise").unwrap();
        assert!(listen < advise);
    }

    #[test]
    fn test_detail_featured_badge() {
        let service = Service {
            title: "Corporate".to_owned(),
            featured: true,
            ..Default::default()
        };
        let html = render_detail(&renderer(), &service);
        assert!(html.contains(r#"<span class="badge">Featured</span>"#));
    }

    #[test]
    fn test_detail_without_description_shows_missing_state() {
        let service = Service {
            title: "Corporate".to_owned(),
            ..Default::default()
        };
        let html = render_detail(&renderer(), &service);
        assert!(html.contains("currently unavailable"));
    }

    #[test]
    fn test_detail_escapes_title() {
        let service = Service {
            title: "Wills & Probate".to_owned(),
            ..Default::default()
        };
        let html = render_detail(&renderer(), &service);
        assert!(html.contains("<h1>Wills &amp; Probate</h1>"));
    }
}
