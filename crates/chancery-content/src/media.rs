//! Media URL construction.
//!
//! Asset references look like `image-{id}-{width}x{height}-{format}`; the
//! CDN serves them at `{cdn}/images/{project}/{dataset}/{id}-{WxH}.{fmt}`
//! with resize parameters in the query string. A reference that does not
//! parse resolves to the local placeholder instead of failing: a broken
//! image field must never take a page down.

use std::fmt::Write;

use chancery_config::ContentConfig;

/// Path served for unresolvable or absent image references.
pub const PLACEHOLDER: &str = "/placeholder.svg";

/// Builds CDN URLs from Content Store asset references.
#[derive(Clone, Debug)]
pub struct MediaUrlBuilder {
    cdn_url: String,
    project_id: String,
    dataset: String,
}

impl MediaUrlBuilder {
    /// Create a builder.
    #[must_use]
    pub fn new(
        cdn_url: impl Into<String>,
        project_id: impl Into<String>,
        dataset: impl Into<String>,
    ) -> Self {
        let cdn_url: String = cdn_url.into();
        Self {
            cdn_url: cdn_url.trim_end_matches('/').to_owned(),
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// Create a builder from content configuration.
    #[must_use]
    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(&config.cdn_url, &config.project_id, &config.dataset)
    }

    /// Resolve an asset reference to a CDN URL.
    ///
    /// Optional `width`/`height` become resize parameters. Malformed
    /// references resolve to [`PLACEHOLDER`].
    #[must_use]
    pub fn url(&self, reference: &str, width: Option<u32>, height: Option<u32>) -> String {
        let Some((id, dims, format)) = parse_image_ref(reference) else {
            return PLACEHOLDER.to_owned();
        };

        let mut url = format!(
            "{}/images/{}/{}/{id}-{dims}.{format}",
            self.cdn_url, self.project_id, self.dataset
        );

        let mut sep = '?';
        if let Some(w) = width {
            let _ = write!(url, "{sep}w={w}");
            sep = '&';
        }
        if let Some(h) = height {
            let _ = write!(url, "{sep}h={h}");
        }

        url
    }
}

/// Split `image-{id}-{WxH}-{fmt}` into its parts.
///
/// Returns `None` for anything that is not a well-formed image reference.
fn parse_image_ref(reference: &str) -> Option<(&str, &str, &str)> {
    let rest = reference.strip_prefix("image-")?;

    // The id itself may contain dashes, so split from the right
    let (rest, format) = rest.rsplit_once('-')?;
    let (id, dims) = rest.rsplit_once('-')?;

    if id.is_empty() || format.is_empty() {
        return None;
    }

    // Dimensions must look like {width}x{height}
    let (w, h) = dims.split_once('x')?;
    if w.is_empty()
        || h.is_empty()
        || !w.bytes().all(|b| b.is_ascii_digit())
        || !h.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    Some((id, dims, format))
}
