//! Content Store access for Chancery.
//!
//! Provides the read-only query client ([`ContentClient`]), the typed
//! documents the firm's CMS schemas produce, and the media URL builder
//! ([`MediaUrlBuilder`]) that turns asset references into CDN URLs.
//!
//! The Content Store owns every document; this crate never writes. Missing
//! documents are a normal outcome (`Ok(None)`), and broken image references
//! resolve to a placeholder path: upstream content problems degrade pages,
//! they never crash them.

mod client;
mod documents;
mod error;
mod media;
mod queries;

pub use client::ContentClient;
pub use documents::{
    AboutPage, Asset, ContactInfo, ImageRef, LegalNoticeItem, LegalNotices, NavLink, OpeningHours,
    ProcessStep, Seo, Service, ServiceInfo, ServiceSummary, SiteSettings, Slug, SocialLinks,
    Testimonial,
};
pub use error::ContentError;
pub use media::{MediaUrlBuilder, PLACEHOLDER};
