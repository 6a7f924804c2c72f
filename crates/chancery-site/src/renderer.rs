//! Unified page rendering.
//!
//! [`SiteRenderer`] owns everything page assembly needs (the media URL
//! builder, the portable-text renderer and the site-wide fallbacks) and
//! exposes one method per route. Every method takes the site settings as an
//! `Option`: a missing settings document degrades to built-in fallback copy,
//! it never fails the render.

use chancery_content::{
    AboutPage, LegalNoticeItem, MediaUrlBuilder, Service, ServiceSummary, SiteSettings,
    Testimonial,
};
use chancery_richtext::HtmlRenderer;

use crate::layout;
use crate::pages;
use crate::seo::PageMeta;

/// Renders complete HTML documents for every route on the site.
pub struct SiteRenderer {
    pub(crate) media: MediaUrlBuilder,
    pub(crate) richtext: HtmlRenderer,
    pub(crate) base_url: String,
    pub(crate) default_title: String,
}

impl SiteRenderer {
    /// Create a renderer.
    ///
    /// # Arguments
    ///
    /// * `media` - Asset-reference → CDN URL builder
    /// * `base_url` - Canonical site base URL (for OG tags)
    /// * `default_title` - Site title fallback when settings are missing
    #[must_use]
    pub fn new(
        media: MediaUrlBuilder,
        base_url: impl Into<String>,
        default_title: impl Into<String>,
    ) -> Self {
        let richtext = {
            let media = media.clone();
            HtmlRenderer::new().with_asset_urls(move |reference| {
                media.url(reference, Some(pages::BODY_IMAGE_WIDTH), None)
            })
        };
        Self {
            media,
            richtext,
            base_url: base_url.into(),
            default_title: default_title.into(),
        }
    }

    /// Render the home page.
    #[must_use]
    pub fn home(
        &self,
        settings: Option<&SiteSettings>,
        services: &[ServiceSummary],
        testimonials: &[Testimonial],
    ) -> String {
        let meta = PageMeta::for_site(self, settings);
        let body = pages::home::render(self, settings, services, testimonials);
        layout::document(self, settings, services, &meta, &body)
    }

    /// Render the about page.
    #[must_use]
    pub fn about(
        &self,
        settings: Option<&SiteSettings>,
        services: &[ServiceSummary],
        about: Option<&AboutPage>,
    ) -> String {
        let mut meta = PageMeta::for_site(self, settings);
        if let Some(seo) = about.and_then(|a| a.seo.as_ref()) {
            meta.apply_overrides(self, seo);
        }
        let body = pages::about::render(self, about);
        layout::document(self, settings, services, &meta, &body)
    }

    /// Render the services listing page.
    #[must_use]
    pub fn services(
        &self,
        settings: Option<&SiteSettings>,
        services: &[ServiceSummary],
    ) -> String {
        let meta = PageMeta::for_site(self, settings);
        let body = pages::services::render_listing(settings, services);
        layout::document(self, settings, services, &meta, &body)
    }

    /// Render one service's detail page.
    #[must_use]
    pub fn service_detail(
        &self,
        settings: Option<&SiteSettings>,
        services: &[ServiceSummary],
        service: &Service,
    ) -> String {
        let mut meta = PageMeta::for_site(self, settings);
        meta.title = format!("{} | Legal Services", service.title);
        if let Some(description) = &service.short_description {
            meta.description.clone_from(description);
        }
        let body = pages::services::render_detail(self, service);
        layout::document(self, settings, services, &meta, &body)
    }

    /// Render the contact page.
    #[must_use]
    pub fn contact(
        &self,
        settings: Option<&SiteSettings>,
        services: &[ServiceSummary],
    ) -> String {
        let mut meta = PageMeta::for_site(self, settings);
        meta.title = format!("Contact Us | {}", self.site_title(settings));
        let body = pages::contact::render(settings);
        layout::document(self, settings, services, &meta, &body)
    }

    /// Render a legal-notice page (privacy, terms, complaints).
    ///
    /// A `None` notice renders the content-missing state with the fallback
    /// title, so an unpublished notice still produces a page.
    #[must_use]
    pub fn legal_notice(
        &self,
        settings: Option<&SiteSettings>,
        services: &[ServiceSummary],
        notice: Option<&LegalNoticeItem>,
        fallback_title: &str,
    ) -> String {
        let mut meta = PageMeta::for_site(self, settings);
        meta.title = notice
            .and_then(|n| n.title.clone())
            .unwrap_or_else(|| fallback_title.to_owned());
        meta.no_index = notice.is_some_and(|n| n.no_index);
        let body = pages::legal::render(self, notice, fallback_title);
        layout::document(self, settings, services, &meta, &body)
    }

    /// Render the 404 page.
    #[must_use]
    pub fn not_found(
        &self,
        settings: Option<&SiteSettings>,
        services: &[ServiceSummary],
    ) -> String {
        let mut meta = PageMeta::for_site(self, settings);
        meta.title = format!("Page Not Found | {}", self.site_title(settings));
        meta.no_index = true;
        let body = pages::not_found();
        layout::document(self, settings, services, &meta, &body)
    }

    /// Canonical site base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Site display title with fallback.
    pub(crate) fn site_title(&self, settings: Option<&SiteSettings>) -> String {
        settings
            .and_then(|s| s.title.clone())
            .unwrap_or_else(|| self.default_title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> SiteRenderer {
        SiteRenderer::new(
            MediaUrlBuilder::new("https://cdn.sanity.io", "test", "production"),
            "https://example-firm.co.uk",
            "Example Firm",
        )
    }

    #[test]
    fn test_home_renders_without_settings() {
        let html = renderer().home(None, &[], &[]);
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("Example Firm"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_service_detail_sets_title_and_description() {
        let service = Service {
            title: "Employment Law".to_owned(),
            short_description: Some("Expert guidance on employment matters.".to_owned()),
            ..Default::default()
        };
        let html = renderer().service_detail(None, &[], &service);
        assert!(html.contains("<title>Employment Law | Legal Services</title>"));
        assert!(html.contains("Expert guidance on employment matters."));
    }

    #[test]
    fn test_not_found_is_noindex() {
        let html = renderer().not_found(None, &[]);
        assert!(html.contains("noindex"));
        assert!(html.contains("Page Not Found"));
    }

    #[test]
    fn test_legal_notice_missing_content_state() {
        let html = renderer().legal_notice(None, &[], None, "Privacy Policy");
        assert!(html.contains("Privacy Policy"));
        assert!(html.contains("content is currently unavailable"));
    }
}
