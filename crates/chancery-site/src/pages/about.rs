//! About page body.

use std::fmt::Write;

use chancery_content::AboutPage;
use chancery_richtext::escape_html;

use crate::renderer::SiteRenderer;

pub(crate) fn render(renderer: &SiteRenderer, about: Option<&AboutPage>) -> String {
    let mut out = String::with_capacity(4096);

    let Some(about) = about else {
        super::content_missing("About Us", &mut out);
        return out;
    };

    // Hero
    out.push_str("<section class=\"about-hero\">");
    let hero_title = about.hero_title.as_deref().unwrap_or("About Us");
    let _ = write!(out, "<h1>{}</h1>", escape_html(hero_title));
    if let Some(reference) = about.hero_image.as_ref().and_then(|i| i.reference()) {
        let src = renderer.media.url(reference, Some(1920), Some(1080));
        let alt = about
            .hero_image
            .as_ref()
            .and_then(|i| i.alt.as_deref())
            .unwrap_or(hero_title);
        let _ = write!(
            out,
            r#"<img src="{}" alt="{}">"#,
            escape_html(&src),
            escape_html(alt)
        );
    }
    out.push_str("</section>");

    // The four titled rich-text sections, in fixed order
    let sections = [
        ("who-we-are", &about.who_we_are_title, &about.who_we_are_content),
        ("what-we-do", &about.what_we_do_title, &about.what_we_do_content),
        ("our-location", &about.our_location_title, &about.our_location_content),
        ("contact-us", &about.contact_us_title, &about.contact_us_content),
    ];
    for (class, title, content) in sections {
        // Sections the editors have not filled in are simply omitted
        if title.is_none() && content.is_none() {
            continue;
        }
        let _ = write!(out, "<section class=\"about-section {class}\">");
        if let Some(title) = title {
            let _ = write!(out, "<h2>{}</h2>", escape_html(title));
        }
        out.push_str(&renderer.richtext.render_opt(content.as_deref()));
        out.push_str("</section>");
    }

    out
}
