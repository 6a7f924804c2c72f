//! Practice-area icon resolution.
//!
//! Editors pick an icon for each service by name in the Studio. Resolution
//! is three-tier and total: the curated set first, then the wider catalog by
//! exact identifier, then the briefcase. Whatever string arrives, a usable
//! SVG comes back.

// Inline SVGs (24x24 outline style, stroked with the current text color)
const SVG_BRIEFCASE: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"></path><rect x="2" y="6" width="20" height="14" rx="2"></rect></svg>"#;
const SVG_BUILDING: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"></path><path d="M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2"></path><path d="M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2"></path><path d="M10 6h4M10 10h4M10 14h4M10 18h4"></path></svg>"#;
const SVG_USERS: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"></path><circle cx="9" cy="7" r="4"></circle><path d="M22 21v-2a4 4 0 0 0-3-3.87"></path><path d="M16 3.13a4 4 0 0 1 0 7.75"></path></svg>"#;
const SVG_HOME: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2Z"></path><path d="M9 22V12h6v10"></path></svg>"#;
const SVG_GAVEL: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="m14 13-7.5 7.5a2.12 2.12 0 0 1-3-3L11 10"></path><path d="m16 16 6-6"></path><path d="m8 8 6-6"></path><path d="m9 7 8 8"></path><path d="m21 11-8-8"></path></svg>"#;
const SVG_HEART: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"></path></svg>"#;
const SVG_FILE_TEXT: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"></path><path d="M14 2v4a2 2 0 0 0 2 2h4"></path><path d="M10 9H8M16 13H8M16 17H8"></path></svg>"#;
const SVG_BOOK_OPEN: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M12 7v14"></path><path d="M3 18a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h5a4 4 0 0 1 4 4 4 4 0 0 1 4-4h5a1 1 0 0 1 1 1v13a1 1 0 0 1-1 1h-6a3 3 0 0 0-3 3 3 3 0 0 0-3-3Z"></path></svg>"#;
const SVG_GLOBE: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><circle cx="12" cy="12" r="10"></circle><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"></path><path d="M2 12h20"></path></svg>"#;
const SVG_PLANE: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M17.8 19.2 16 11l3.5-3.5C21 6 21.5 4 21 3c-1-.5-3 0-4.5 1.5L13 8 4.8 6.2c-.5-.1-.9.1-1.1.5l-.3.5c-.2.5-.1 1 .3 1.3L9 12l-2 3H4l-1 1 3 2 2 3 1-1v-3l3-2 3.5 5.3c.3.4.8.5 1.3.3l.5-.2c.4-.3.6-.7.5-1.2z"></path></svg>"#;
const SVG_SCALE: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"></path><path d="m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"></path><path d="M7 21h10"></path><path d="M12 3v18"></path><path d="M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2"></path></svg>"#;
const SVG_SHIELD: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1Z"></path></svg>"#;
const SVG_SKULL: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><circle cx="9" cy="12" r="1"></circle><circle cx="15" cy="12" r="1"></circle><path d="M8 20v2h8v-2"></path><path d="m12.5 17-.5-1-.5 1h1Z"></path><path d="M16 20a2 2 0 0 0 1.56-3.25 8 8 0 1 0-11.12 0A2 2 0 0 0 8 20"></path></svg>"#;
const SVG_USERS_ROUND: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M18 21a8 8 0 0 0-16 0"></path><circle cx="10" cy="8" r="5"></circle><path d="M22 20c0-3.37-2-6.5-4-8a5 5 0 0 0-.45-8.3"></path></svg>"#;
const SVG_WRENCH: &str = r#"<svg class="icon" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"></path></svg>"#;

/// Icon used when nothing else resolves.
const DEFAULT_ICON: &str = SVG_BRIEFCASE;

/// Curated set: the icons the firm's services actually use.
const CURATED: &[(&str, &str)] = &[
    ("Building2", SVG_BUILDING),
    ("FileText", SVG_FILE_TEXT),
    ("Gavel", SVG_GAVEL),
    ("Heart", SVG_HEART),
    ("Home", SVG_HOME),
    ("Users", SVG_USERS),
];

/// Wider catalog, sorted by identifier for binary search.
const CATALOG: &[(&str, &str)] = &[
    ("BookOpen", SVG_BOOK_OPEN),
    ("Briefcase", SVG_BRIEFCASE),
    ("Globe", SVG_GLOBE),
    ("Plane", SVG_PLANE),
    ("Scale", SVG_SCALE),
    ("Shield", SVG_SHIELD),
    ("Skull", SVG_SKULL),
    ("UsersRound", SVG_USERS_ROUND),
    ("Wrench", SVG_WRENCH),
];

/// Resolve a symbolic icon name to inline SVG markup.
///
/// Lookup order: curated set, then the catalog by exact identifier, then
/// the default briefcase. Total: every input yields usable markup.
#[must_use]
pub fn resolve_icon(name: &str) -> &'static str {
    if name.is_empty() {
        return DEFAULT_ICON;
    }

    if let Some((_, svg)) = CURATED.iter().find(|(n, _)| *n == name) {
        return svg;
    }

    match CATALOG.binary_search_by_key(&name, |&(n, _)| n) {
        Ok(idx) => CATALOG[idx].1,
        Err(_) => DEFAULT_ICON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_curated_name_resolves() {
        assert_eq!(resolve_icon("Gavel"), SVG_GAVEL);
        assert_eq!(resolve_icon("Building2"), SVG_BUILDING);
    }

    #[test]
    fn test_catalog_name_resolves() {
        assert_eq!(resolve_icon("Scale"), SVG_SCALE);
        assert_eq!(resolve_icon("UsersRound"), SVG_USERS_ROUND);
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert_eq!(resolve_icon("NoSuchIcon"), DEFAULT_ICON);
    }

    #[test]
    fn test_empty_name_falls_back_to_default() {
        assert_eq!(resolve_icon(""), DEFAULT_ICON);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(resolve_icon("gavel"), DEFAULT_ICON);
    }

    #[test]
    fn test_catalog_is_sorted_for_binary_search() {
        let names: Vec<&str> = CATALOG.iter().map(|(n, _)| *n).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_every_icon_is_svg() {
        for (name, svg) in CURATED.iter().chain(CATALOG.iter()) {
            assert!(svg.starts_with("<svg"), "{name} is not inline SVG");
            assert!(svg.ends_with("</svg>"), "{name} is not closed");
        }
    }
}
