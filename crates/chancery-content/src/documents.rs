//! Typed Content Store documents.
//!
//! Mirrors of the firm's CMS schemas, deserialized from query results. All
//! documents are read-only here; they are authored and published in the
//! Content Store. Fields the editors may leave unfilled are `Option` or
//! default to empty so a partially-populated document still renders.

use serde::Deserialize;

use chancery_richtext::RichTextBlock;

/// An image field: asset reference plus optional alt text.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ImageRef {
    /// Backing asset, absent when the editor removed the image.
    #[serde(default)]
    pub asset: Option<Asset>,
    /// Alt text.
    #[serde(default)]
    pub alt: Option<String>,
}

/// Asset pointer inside an [`ImageRef`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Asset {
    /// Opaque asset id, e.g. `image-abc123-1920x1080-jpg`.
    #[serde(rename = "_ref", default)]
    pub reference: String,
}

impl ImageRef {
    /// The asset reference, if the image has one.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .map(|a| a.reference.as_str())
            .filter(|r| !r.is_empty())
    }
}

/// Slug wrapper used by slugged document types.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Slug {
    /// URL-safe identifier.
    #[serde(default)]
    pub current: String,
}

/// Reusable SEO settings block.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub og_image: Option<ImageRef>,
    #[serde(default)]
    pub no_index: bool,
}

/// Office contact details shown in the header, footer and contact pages.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub emergency_phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub hours: Vec<OpeningHours>,
}

/// One opening-hours line (`days` label plus the hours for those days).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub days: String,
    #[serde(default)]
    pub hours: String,
}

/// Copy for the services listing page.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub service_page_title: Option<String>,
    pub service_page_description: Option<String>,
}

/// A single navigation entry.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NavLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub external: bool,
}

/// Social profile URLs for the footer.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
}

/// One legal-notice page (privacy, terms, complaints).
///
/// A notice either carries portable-text `content` rendered in-site, or an
/// `external_url` the route redirects to.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalNoticeItem {
    pub title: Option<String>,
    pub image: Option<ImageRef>,
    pub content: Option<Vec<RichTextBlock>>,
    pub external_url: Option<String>,
    #[serde(default)]
    pub no_index: bool,
}

/// The legal notices attached to site settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalNotices {
    pub privacy_security: Option<LegalNoticeItem>,
    pub terms_conditions: Option<LegalNoticeItem>,
    pub complaints_procedure: Option<LegalNoticeItem>,
}

/// Singleton site settings document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub title: Option<String>,
    pub description: Option<String>,
    pub logo: Option<ImageRef>,
    pub favicon: Option<ImageRef>,
    pub contact_info: Option<ContactInfo>,
    pub service_info: Option<ServiceInfo>,
    pub legal_notices: Option<LegalNotices>,
    pub social_media: Option<SocialLinks>,
    #[serde(default)]
    pub navigation: Vec<NavLink>,
    pub footer_text: Option<Vec<RichTextBlock>>,
    pub seo: Option<Seo>,
}

/// A practice-area document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Slug,
    pub short_description: Option<String>,
    pub detailed_description: Option<Vec<RichTextBlock>>,
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub process_steps: Vec<ProcessStep>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i64,
}

/// One step of a service's engagement process.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProcessStep {
    #[serde(default)]
    pub step: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Abbreviated service projection used for listings, the footer and the
/// sitemap.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Slug,
    pub short_description: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i64,
}

/// A client testimonial.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Testimonial {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    pub position: Option<String>,
    #[serde(default)]
    pub rating: u8,
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub featured: bool,
}

/// The about-page document: hero plus four titled rich-text sections.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    pub hero_title: Option<String>,
    pub hero_image: Option<ImageRef>,
    pub who_we_are_title: Option<String>,
    pub who_we_are_content: Option<Vec<RichTextBlock>>,
    pub what_we_do_title: Option<String>,
    pub what_we_do_content: Option<Vec<RichTextBlock>>,
    pub our_location_title: Option<String>,
    pub our_location_content: Option<Vec<RichTextBlock>>,
    pub contact_us_title: Option<String>,
    pub contact_us_content: Option<Vec<RichTextBlock>>,
    pub seo: Option<Seo>,
}
