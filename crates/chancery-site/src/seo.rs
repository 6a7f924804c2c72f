//! SEO metadata with site-wide fallback chains.

use chancery_content::{Seo, SiteSettings};

use crate::renderer::SiteRenderer;

/// Fallback description when neither SEO nor settings provide one.
const DEFAULT_DESCRIPTION: &str = "Professional legal services in corporate law, employment law, \
                                   commercial property, litigation and family law.";

/// Fallback keyword list.
const DEFAULT_KEYWORDS: &str = "solicitors, legal services, London law firm, corporate law, \
                                employment law, commercial property, litigation";

/// Open Graph image dimensions.
const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

/// Resolved metadata for one page's `<head>`.
pub(crate) struct PageMeta {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) keywords: String,
    pub(crate) og_image: Option<String>,
    pub(crate) favicon: Option<String>,
    pub(crate) no_index: bool,
}

impl PageMeta {
    /// Site-level defaults: each field falls back from the settings SEO
    /// block, to the settings document, to built-in copy.
    pub(crate) fn for_site(renderer: &SiteRenderer, settings: Option<&SiteSettings>) -> Self {
        let seo = settings.and_then(|s| s.seo.as_ref());

        let title = seo
            .and_then(|s| s.meta_title.clone())
            .or_else(|| settings.and_then(|s| s.title.clone()))
            .unwrap_or_else(|| renderer.default_title.clone());

        let description = seo
            .and_then(|s| s.meta_description.clone())
            .or_else(|| settings.and_then(|s| s.description.clone()))
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned());

        let keywords = seo
            .map(|s| s.keywords.join(", "))
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| DEFAULT_KEYWORDS.to_owned());

        let og_image = seo
            .and_then(|s| s.og_image.as_ref())
            .and_then(|image| image.reference())
            .map(|reference| {
                renderer
                    .media
                    .url(reference, Some(OG_IMAGE_WIDTH), Some(OG_IMAGE_HEIGHT))
            });

        let favicon = settings
            .and_then(|s| s.favicon.as_ref())
            .and_then(|image| image.reference())
            .map(|reference| renderer.media.url(reference, None, None));

        Self {
            title,
            description,
            keywords,
            og_image,
            favicon,
            no_index: seo.is_some_and(|s| s.no_index),
        }
    }

    /// Overlay a page-level SEO block onto the site defaults.
    pub(crate) fn apply_overrides(&mut self, renderer: &SiteRenderer, seo: &Seo) {
        if let Some(title) = &seo.meta_title {
            self.title.clone_from(title);
        }
        if let Some(description) = &seo.meta_description {
            self.description.clone_from(description);
        }
        if !seo.keywords.is_empty() {
            self.keywords = seo.keywords.join(", ");
        }
        if let Some(reference) = seo.og_image.as_ref().and_then(|image| image.reference()) {
            self.og_image = Some(renderer.media.url(
                reference,
                Some(OG_IMAGE_WIDTH),
                Some(OG_IMAGE_HEIGHT),
            ));
        }
        if seo.no_index {
            self.no_index = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chancery_content::MediaUrlBuilder;
    use pretty_assertions::assert_eq;

    fn renderer() -> SiteRenderer {
        SiteRenderer::new(
            MediaUrlBuilder::new("https://cdn.sanity.io", "test", "production"),
            "https://example-firm.co.uk",
            "Example Firm",
        )
    }

    #[test]
    fn test_built_in_fallbacks_without_settings() {
        let meta = PageMeta::for_site(&renderer(), None);
        assert_eq!(meta.title, "Example Firm");
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
        assert_eq!(meta.keywords, DEFAULT_KEYWORDS);
        assert!(meta.og_image.is_none());
        assert!(!meta.no_index);
    }

    #[test]
    fn test_settings_title_beats_default() {
        let settings = SiteSettings {
            title: Some("Michael Stevens Solicitors".to_owned()),
            ..Default::default()
        };
        let meta = PageMeta::for_site(&renderer(), Some(&settings));
        assert_eq!(meta.title, "Michael Stevens Solicitors");
    }

    #[test]
    fn test_seo_block_beats_settings_title() {
        let settings = SiteSettings {
            title: Some("Plain Title".to_owned()),
            seo: Some(Seo {
                meta_title: Some("Optimized Title".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let meta = PageMeta::for_site(&renderer(), Some(&settings));
        assert_eq!(meta.title, "Optimized Title");
    }

    #[test]
    fn test_no_index_flag_carries() {
        let settings = SiteSettings {
            seo: Some(Seo {
                no_index: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        let meta = PageMeta::for_site(&renderer(), Some(&settings));
        assert!(meta.no_index);
    }

    #[test]
    fn test_page_override_keeps_unset_fields() {
        let mut meta = PageMeta::for_site(&renderer(), None);
        let page_seo = Seo {
            meta_description: Some("About our firm.".to_owned()),
            ..Default::default()
        };
        meta.apply_overrides(&renderer(), &page_seo);

        assert_eq!(meta.title, "Example Firm");
        assert_eq!(meta.description, "About our firm.");
    }
}
