//! Home page body.

use std::fmt::Write;

use chancery_content::{ServiceSummary, SiteSettings, Testimonial};
use chancery_richtext::escape_html;

use crate::pages::services::service_card;
use crate::renderer::SiteRenderer;

/// Hero strapline when the settings document has no description.
const DEFAULT_STRAPLINE: &str = "Expert legal advice with integrity, delivered by a team that \
                                 puts your interests first.";

pub(crate) fn render(
    renderer: &SiteRenderer,
    settings: Option<&SiteSettings>,
    services: &[ServiceSummary],
    testimonials: &[Testimonial],
) -> String {
    let mut out = String::with_capacity(4096);

    // Hero
    out.push_str("<section class=\"hero\">");
    let _ = write!(out, "<h1>{}</h1>", escape_html(&renderer.site_title(settings)));
    let strapline = settings
        .and_then(|s| s.description.as_deref())
        .unwrap_or(DEFAULT_STRAPLINE);
    let _ = write!(out, "<p class=\"strapline\">{}</p>", escape_html(strapline));
    out.push_str(r#"<a class="cta" href="/contact">Book a Consultation</a>"#);
    out.push_str("</section>");

    // Practice areas
    out.push_str("<section class=\"home-services\"><h2>Our Practice Areas</h2>");
    if services.is_empty() {
        super::content_missing("Our Practice Areas", &mut out);
    } else {
        out.push_str("<div class=\"services-grid\">");
        for service in services {
            service_card(service, &mut out);
        }
        out.push_str("</div>");
        out.push_str(r#"<a class="view-all" href="/services">View All Services</a>"#);
    }
    out.push_str("</section>");

    // About teaser
    out.push_str(
        r#"<section class="home-about"><h2>About Our Firm</h2><p>We combine decades of experience with a personal, practical approach to every matter.</p><a href="/about">Learn more about us</a></section>"#,
    );

    // Testimonials render only when there are any
    if !testimonials.is_empty() {
        out.push_str("<section class=\"testimonials\"><h2>What Our Clients Say</h2>");
        for testimonial in testimonials {
            render_testimonial(testimonial, &mut out);
        }
        out.push_str("</section>");
    }

    // Contact section
    contact_section(settings, &mut out);

    out
}

fn render_testimonial(testimonial: &Testimonial, out: &mut String) {
    out.push_str("<blockquote class=\"testimonial\">");
    let _ = write!(out, "<p>{}</p>", escape_html(&testimonial.content));
    if testimonial.rating > 0 {
        let rating = testimonial.rating.min(5);
        let _ = write!(
            out,
            r#"<span class="rating" aria-label="{rating} out of 5 stars">{}</span>"#,
            "★".repeat(usize::from(rating))
        );
    }
    let _ = write!(out, "<footer>{}", escape_html(&testimonial.author));
    if let Some(position) = &testimonial.position {
        let _ = write!(out, ", <span>{}</span>", escape_html(position));
    }
    out.push_str("</footer></blockquote>");
}

fn contact_section(settings: Option<&SiteSettings>, out: &mut String) {
    let contact = settings.and_then(|s| s.contact_info.as_ref());

    out.push_str("<section class=\"home-contact\"><h2>Get Expert Legal Advice</h2>");
    out.push_str(
        "<p>Ready to discuss your legal matter? Contact us today for a free consultation.</p>",
    );

    if let Some(phone) = contact.and_then(|c| c.phone.as_deref()) {
        let _ = write!(
            out,
            r#"<p class="phone"><a href="tel:{}">{}</a></p>"#,
            escape_html(&phone.replace(' ', "")),
            escape_html(phone)
        );
    }
    if let Some(email) = contact.and_then(|c| c.email.as_deref()) {
        let _ = write!(
            out,
            r#"<p class="email"><a href="mailto:{}">{}</a></p>"#,
            escape_html(email),
            escape_html(email)
        );
    }

    // Emergency hotline falls back to the main number
    if let Some(emergency) = contact
        .and_then(|c| c.emergency_phone.as_deref().or(c.phone.as_deref()))
    {
        let _ = write!(
            out,
            r#"<aside class="emergency"><h3>Emergency Legal Advice</h3><p>Need urgent legal assistance? Our emergency hotline is available 24/7.</p><a href="tel:{}">{}</a></aside>"#,
            escape_html(&emergency.replace(' ', "")),
            escape_html(emergency)
        );
    }

    out.push_str("</section>");
}
