//! Query constants for the Content Store.
//!
//! Projections are declared next to each other so a schema change in the
//! Studio is a one-file fix here. The `$slug` parameter is bound by the
//! client, never interpolated.

/// Singleton site settings with navigation, contact details, legal notices
/// and SEO defaults.
pub(crate) const SITE_SETTINGS: &str = r#"*[_type == "siteSettings"][0]{
  title,
  description,
  logo{asset, alt},
  favicon{asset, alt},
  contactInfo{phone, email, emergencyPhone, address, hours[]{days, hours}},
  serviceInfo{servicePageTitle, servicePageDescription},
  legalNotices{
    privacySecurity{title, image{asset, alt}, content, externalUrl, noIndex},
    termsConditions{title, image{asset, alt}, content, externalUrl, noIndex},
    complaintsProcedure{title, image{asset, alt}, content, externalUrl, noIndex}
  },
  socialMedia{linkedin, twitter, facebook, instagram, youtube},
  navigation[]{title, url, external},
  footerText,
  seo{metaTitle, metaDescription, keywords, ogImage{asset, alt}, noIndex}
}"#;

/// All services, listing projection, ordered for display.
pub(crate) const SERVICES: &str = r#"*[_type == "service"] | order(order asc, title asc) {
  _id,
  title,
  slug,
  shortDescription,
  icon,
  order
}"#;

/// One service by slug, full projection.
pub(crate) const SERVICE_BY_SLUG: &str = r#"*[_type == "service" && slug.current == $slug][0]{
  _id,
  title,
  slug,
  shortDescription,
  detailedDescription,
  icon,
  features,
  benefits,
  processSteps[]{step, title, description},
  featured,
  order
}"#;

/// The about page document.
pub(crate) const ABOUT_PAGE: &str = r#"*[_type == "aboutPage"][0]{
  heroTitle,
  heroImage{asset, alt},
  whoWeAreTitle,
  whoWeAreContent,
  whatWeDoTitle,
  whatWeDoContent,
  ourLocationTitle,
  ourLocationContent,
  contactUsTitle,
  contactUsContent,
  seo{metaTitle, metaDescription, keywords, ogImage{asset, alt}, noIndex}
}"#;

/// All testimonials, ordered for display.
pub(crate) const TESTIMONIALS: &str = r#"*[_type == "testimonial"] | order(order asc, _createdAt desc) {
  _id,
  content,
  author,
  position,
  rating,
  image{asset, alt},
  featured
}"#;
