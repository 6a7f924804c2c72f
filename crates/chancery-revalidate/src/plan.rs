//! Invalidation planning.
//!
//! One pure function maps a document type (plus optional slug) to the
//! ordered list of cache targets that must be discarded. The table errs on
//! the side of over-invalidation: content that *might* appear on a page
//! purges that page, and anything unrecognized purges the site root.

use std::fmt;

use crate::document_type::DocumentType;

/// A single cache entry (or group of entries) to discard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidationTarget {
    /// A concrete route path, e.g. `/services/family-law`.
    Route(String),
    /// A symbolic tag grouping several routes, e.g. `services`.
    Tag(String),
    /// Every cached page. Used when the shared layout changes.
    All,
}

impl fmt::Display for InvalidationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Route(route) => write!(f, "route {route}"),
            Self::Tag(tag) => write!(f, "tag {tag}"),
            Self::All => f.write_str("all pages"),
        }
    }
}

/// Compute the invalidation targets for a change notification.
///
/// Slugged types add their detail route only when the notification carries a
/// slug; the listing targets are always included so stale listings never
/// outlive an edit.
#[must_use]
pub fn invalidation_plan(doc_type: DocumentType, slug: Option<&str>) -> Vec<InvalidationTarget> {
    use InvalidationTarget::{All, Route, Tag};

    let mut targets = Vec::new();

    match doc_type {
        DocumentType::AboutPage => {
            targets.push(Route("/about".to_owned()));
            targets.push(Tag("aboutPage".to_owned()));
        }
        DocumentType::HomePage => {
            targets.push(Route("/".to_owned()));
            targets.push(Tag("homePage".to_owned()));
        }
        DocumentType::Page => {
            if let Some(slug) = slug {
                targets.push(Route(format!("/{slug}")));
                targets.push(Tag(format!("page-{slug}")));
            }
            targets.push(Route("/pages".to_owned()));
        }
        DocumentType::BlogPost => {
            if let Some(slug) = slug {
                targets.push(Route(format!("/blog/{slug}")));
                targets.push(Tag(format!("post-{slug}")));
            }
            targets.push(Route("/blog".to_owned()));
            targets.push(Tag("blog-posts".to_owned()));
        }
        DocumentType::Service => {
            if let Some(slug) = slug {
                targets.push(Route(format!("/services/{slug}")));
                targets.push(Tag(format!("service-{slug}")));
            }
            targets.push(Route("/services".to_owned()));
            targets.push(Tag("services".to_owned()));
        }
        DocumentType::Product => {
            if let Some(slug) = slug {
                targets.push(Route(format!("/products/{slug}")));
                targets.push(Tag(format!("product-{slug}")));
            }
            targets.push(Route("/products".to_owned()));
            targets.push(Tag("products".to_owned()));
        }
        DocumentType::TeamMember => {
            if let Some(slug) = slug {
                targets.push(Route(format!("/team/{slug}")));
            }
            targets.push(Route("/team".to_owned()));
            // Team members appear on the about page too
            targets.push(Route("/about".to_owned()));
            targets.push(Tag("team".to_owned()));
        }
        DocumentType::Testimonial => {
            // Testimonials surface on several pages
            targets.push(Route("/".to_owned()));
            targets.push(Route("/about".to_owned()));
            targets.push(Route("/testimonials".to_owned()));
            targets.push(Tag("testimonials".to_owned()));
        }
        DocumentType::Faq => {
            targets.push(Route("/faq".to_owned()));
            targets.push(Tag("faq".to_owned()));
        }
        DocumentType::CompanyInfo => {
            targets.push(Route("/".to_owned()));
            targets.push(Route("/about".to_owned()));
            targets.push(Route("/contact".to_owned()));
            targets.push(Tag("global-data".to_owned()));
        }
        DocumentType::Navigation => {
            // Navigation is part of the layout on every page
            targets.push(All);
            targets.push(Tag("navigation".to_owned()));
        }
        DocumentType::SiteSettings => {
            targets.push(All);
            targets.push(Tag("settings".to_owned()));
        }
        DocumentType::Unknown => {
            targets.push(Route("/".to_owned()));
            targets.push(Tag("fallback".to_owned()));
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn routes(targets: &[InvalidationTarget]) -> Vec<&str> {
        targets
            .iter()
            .filter_map(|t| match t {
                InvalidationTarget::Route(r) => Some(r.as_str()),
                _ => None,
            })
            .collect()
    }

    fn tags(targets: &[InvalidationTarget]) -> Vec<&str> {
        targets
            .iter()
            .filter_map(|t| match t {
                InvalidationTarget::Tag(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_service_with_slug() {
        let plan = invalidation_plan(DocumentType::Service, Some("employment-law"));
        assert_eq!(
            routes(&plan),
            vec!["/services/employment-law", "/services"]
        );
        assert_eq!(tags(&plan), vec!["service-employment-law", "services"]);
    }

    #[test]
    fn test_service_without_slug_still_purges_listing() {
        let plan = invalidation_plan(DocumentType::Service, None);
        assert_eq!(routes(&plan), vec!["/services"]);
        assert_eq!(tags(&plan), vec!["services"]);
    }

    #[test]
    fn test_about_page() {
        let plan = invalidation_plan(DocumentType::AboutPage, None);
        assert_eq!(
            plan,
            vec![
                InvalidationTarget::Route("/about".to_owned()),
                InvalidationTarget::Tag("aboutPage".to_owned()),
            ]
        );
    }

    #[test]
    fn test_blog_post_aliases_share_a_plan() {
        let from_post = invalidation_plan(DocumentType::parse("post"), Some("news-1"));
        let from_blog_post = invalidation_plan(DocumentType::parse("blogPost"), Some("news-1"));
        assert_eq!(from_post, from_blog_post);
        assert_eq!(routes(&from_post), vec!["/blog/news-1", "/blog"]);
    }

    #[test]
    fn test_testimonial_purges_every_surface() {
        let plan = invalidation_plan(DocumentType::Testimonial, None);
        assert_eq!(routes(&plan), vec!["/", "/about", "/testimonials"]);
        assert_eq!(tags(&plan), vec!["testimonials"]);
    }

    #[test]
    fn test_team_member_touches_about_page() {
        let plan = invalidation_plan(DocumentType::TeamMember, Some("jane-doe"));
        assert_eq!(routes(&plan), vec!["/team/jane-doe", "/team", "/about"]);
    }

    #[test]
    fn test_layout_types_purge_everything() {
        for doc_type in [DocumentType::Navigation, DocumentType::SiteSettings] {
            let plan = invalidation_plan(doc_type, None);
            assert!(plan.contains(&InvalidationTarget::All), "{doc_type:?}");
        }
    }

    #[test]
    fn test_unknown_defaults_to_root() {
        let plan = invalidation_plan(DocumentType::Unknown, None);
        assert_eq!(
            plan,
            vec![
                InvalidationTarget::Route("/".to_owned()),
                InvalidationTarget::Tag("fallback".to_owned()),
            ]
        );
    }

    #[test]
    fn test_plans_are_never_empty() {
        for tag in ["service", "page", "post", "team", "menu", "nope", ""] {
            let plan = invalidation_plan(DocumentType::parse(tag), None);
            assert!(!plan.is_empty(), "plan for {tag:?} is empty");
        }
    }
}
