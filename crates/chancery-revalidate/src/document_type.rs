//! Document type discriminants.

/// Known document types published by the Content Store.
///
/// The Studio's schemas grew a few aliases over time (two spellings of blog
/// posts, team members, company info, …); aliases collapse into a single
/// variant at parse time, so every spelling of a type necessarily maps to
/// the same invalidation plan. Unrecognized tags parse to [`Unknown`] and
/// take the conservative default plan rather than erroring.
///
/// [`Unknown`]: DocumentType::Unknown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentType {
    /// The about page singleton.
    AboutPage,
    /// The home page singleton.
    HomePage,
    /// A free-form slugged page.
    Page,
    /// A blog post (`post` or `blogPost`).
    BlogPost,
    /// A practice-area service.
    Service,
    /// A product listing.
    Product,
    /// A team member (`team` or `teamMember`).
    TeamMember,
    /// A client testimonial.
    Testimonial,
    /// A frequently-asked question.
    Faq,
    /// Firm-wide contact/company details (`contactInfo` or `companyInfo`).
    CompanyInfo,
    /// Site navigation (`navigation` or `menu`).
    Navigation,
    /// Site settings (`siteSettings` or `settings`).
    SiteSettings,
    /// Anything the dispatcher does not recognize.
    Unknown,
}

impl DocumentType {
    /// Parse a raw `_type` tag.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "aboutPage" => Self::AboutPage,
            "homePage" => Self::HomePage,
            "page" => Self::Page,
            "post" | "blogPost" => Self::BlogPost,
            "service" => Self::Service,
            "product" => Self::Product,
            "team" | "teamMember" => Self::TeamMember,
            "testimonial" => Self::Testimonial,
            "faq" => Self::Faq,
            "contactInfo" | "companyInfo" => Self::CompanyInfo,
            "navigation" | "menu" => Self::Navigation,
            "siteSettings" | "settings" => Self::SiteSettings,
            _ => Self::Unknown,
        }
    }
}
