//! Legal-notice page bodies (privacy, terms, complaints).

use std::fmt::Write;

use chancery_content::LegalNoticeItem;
use chancery_richtext::escape_html;

use crate::renderer::SiteRenderer;

pub(crate) fn render(
    renderer: &SiteRenderer,
    notice: Option<&LegalNoticeItem>,
    fallback_title: &str,
) -> String {
    let mut out = String::with_capacity(2048);

    let Some(notice) = notice else {
        super::content_missing(fallback_title, &mut out);
        return out;
    };

    let title = notice.title.as_deref().unwrap_or(fallback_title);

    out.push_str("<section class=\"legal-hero\">");
    let _ = write!(out, "<h1>{}</h1>", escape_html(title));
    if let Some(reference) = notice.image.as_ref().and_then(|i| i.reference()) {
        let src = renderer.media.url(reference, Some(1920), Some(1080));
        let alt = notice
            .image
            .as_ref()
            .and_then(|i| i.alt.as_deref())
            .unwrap_or(title);
        let _ = write!(
            out,
            r#"<img src="{}" alt="{}">"#,
            escape_html(&src),
            escape_html(alt)
        );
    }
    out.push_str("</section>");

    out.push_str("<section class=\"legal-body\">");
    let content = renderer.richtext.render_opt(notice.content.as_deref());
    if content.is_empty() {
        // Notices hosted elsewhere link out instead of rendering content
        if let Some(url) = notice.external_url.as_deref() {
            let _ = write!(
                out,
                r#"<p><a href="{}" target="_blank" rel="noopener noreferrer">Read the full {}</a></p>"#,
                escape_html(url),
                escape_html(title)
            );
        } else {
            super::content_missing(title, &mut out);
        }
    } else {
        let _ = write!(out, "<div class=\"prose\">{content}</div>");
    }
    out.push_str("</section>");

    out
}
