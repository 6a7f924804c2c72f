//! Portable-text rendering for Chancery.
//!
//! The Content Store delivers long-form copy (service descriptions, legal
//! notices, about-page sections) as portable text: an ordered sequence of
//! typed blocks, each holding an ordered sequence of inline spans. This
//! crate deserializes that format ([`RichTextBlock`] and friends) and
//! renders it to HTML ([`HtmlRenderer`]).
//!
//! # Dispatch rules
//!
//! - Block kinds and styles dispatch by exact string match; anything
//!   unregistered renders its children in a plain `<div>` (passthrough),
//!   never an error and never silently dropped.
//! - Inline marks compose in a fixed precedence (link, strong, em,
//!   underline, strike-through, code; outermost first), so output is
//!   deterministic for any mark order in the source.
//! - Image blocks without an asset reference render nothing.
//! - Links with path-relative targets render without new-tab attributes;
//!   all other targets get `target="_blank" rel="noopener noreferrer"`.
//!
//! # Example
//!
//! ```
//! use chancery_richtext::{HtmlRenderer, RichTextBlock};
//!
//! let blocks: Vec<RichTextBlock> = serde_json::from_str(
//!     r#"[{"_type": "block", "style": "normal",
//!          "children": [{"_type": "span", "text": "Welcome", "marks": []}]}]"#,
//! )
//! .unwrap();
//!
//! let html = HtmlRenderer::new().render(&blocks);
//! assert_eq!(html, "<p>Welcome</p>");
//! ```

mod html;
mod model;

pub use html::{HtmlRenderer, escape_html};
pub use model::{AssetRef, MarkDef, RichTextBlock, Span};
