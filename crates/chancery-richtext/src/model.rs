//! Portable-text data model.
//!
//! Documents arrive from the Content Store as an ordered array of typed
//! blocks. Text blocks (`_type: "block"`) carry a style, an ordered list of
//! inline spans, and mark definitions referenced by span marks; image blocks
//! (`_type: "image"`) carry an asset reference. Anything else is an unknown
//! kind handled by the renderer's passthrough arm.

use serde::Deserialize;

/// A single block in a portable-text document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RichTextBlock {
    /// Block kind discriminant (`block`, `image`, or unknown).
    #[serde(rename = "_type", default)]
    pub kind: String,
    /// Text style for `block` kinds: `normal`, `h1`..`h4`, `blockquote`.
    #[serde(default)]
    pub style: Option<String>,
    /// List membership: `bullet` or `number`.
    #[serde(rename = "listItem", default)]
    pub list_item: Option<String>,
    /// List nesting level (1-based). Present on list items only.
    #[serde(default)]
    pub level: Option<u8>,
    /// Ordered inline spans.
    #[serde(default)]
    pub children: Vec<Span>,
    /// Mark definitions referenced by span mark keys.
    #[serde(rename = "markDefs", default)]
    pub mark_defs: Vec<MarkDef>,
    /// Asset reference for `image` kinds.
    #[serde(default)]
    pub asset: Option<AssetRef>,
    /// Alt text for `image` kinds.
    #[serde(default)]
    pub alt: Option<String>,
}

/// An inline span of text with zero or more marks.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Span {
    /// Span kind; always `span` in practice.
    #[serde(rename = "_type", default)]
    pub kind: String,
    /// Text content.
    #[serde(default)]
    pub text: String,
    /// Applied marks: decorator names (`strong`, `em`, `code`, `underline`,
    /// `strike-through`) or keys into the block's mark definitions.
    #[serde(default)]
    pub marks: Vec<String>,
}

/// A mark definition attached to a block.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MarkDef {
    /// Key referenced from span marks.
    #[serde(rename = "_key", default)]
    pub key: String,
    /// Definition kind; `link` is the only kind the firm's schema uses.
    #[serde(rename = "_type", default)]
    pub kind: String,
    /// Link target for `link` definitions.
    #[serde(default)]
    pub href: Option<String>,
}

/// Reference to an asset in the Content Store.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AssetRef {
    /// Opaque asset id, e.g. `image-abc123-800x600-jpg`.
    #[serde(rename = "_ref", default)]
    pub reference: String,
}
