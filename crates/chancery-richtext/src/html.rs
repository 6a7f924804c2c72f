//! HTML rendering for portable-text documents.

use std::fmt::Write;

use crate::model::{MarkDef, RichTextBlock, Span};

/// Inline decorator precedence, outermost wrapper first.
///
/// A span carrying several decorators always nests them in this order (with
/// a link annotation, when present, outside all of them), so rendering the
/// same node is deterministic regardless of the order marks appear in the
/// source document.
const DECORATOR_PRECEDENCE: &[(&str, &str)] = &[
    ("strong", "strong"),
    ("em", "em"),
    ("underline", "u"),
    ("strike-through", "del"),
    ("code", "code"),
];

/// Width requested for inline images, matching the display column.
const IMAGE_WIDTH: u32 = 800;

/// Renders portable-text blocks into HTML.
///
/// Block kinds dispatch by exact string match; kinds without a registered
/// arm render their span children inside a plain `<div>` rather than
/// erroring or dropping content. Image blocks without an asset reference
/// render nothing.
pub struct HtmlRenderer {
    resolve_asset: Box<dyn Fn(&str) -> String + Send + Sync>,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    /// Create a renderer that resolves every asset to the placeholder image.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolve_asset: Box::new(|_| "/placeholder.svg".to_owned()),
        }
    }

    /// Supply the asset-reference → URL resolver used for image blocks.
    #[must_use]
    pub fn with_asset_urls<F>(mut self, resolve: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.resolve_asset = Box::new(resolve);
        self
    }

    /// Render an optional block sequence.
    ///
    /// Absent input renders to the empty string, matching how pages treat
    /// missing rich-text fields.
    #[must_use]
    pub fn render_opt(&self, blocks: Option<&[RichTextBlock]>) -> String {
        blocks.map(|b| self.render(b)).unwrap_or_default()
    }

    /// Render a block sequence to HTML, preserving document order.
    #[must_use]
    pub fn render(&self, blocks: &[RichTextBlock]) -> String {
        let mut out = String::with_capacity(blocks.len() * 64);
        // Tag of the currently open list element, if any
        let mut open_list: Option<&str> = None;

        for block in blocks {
            let list_tag = if block.kind == "block" {
                match block.list_item.as_deref() {
                    Some("bullet") => Some("ul"),
                    Some("number") => Some("ol"),
                    _ => None,
                }
            } else {
                None
            };

            if open_list != list_tag
                && let Some(tag) = open_list.take()
            {
                let _ = write!(out, "</{tag}>");
            }

            if let Some(tag) = list_tag {
                if open_list.is_none() {
                    let _ = write!(out, "<{tag}>");
                    open_list = Some(tag);
                }
                out.push_str("<li>");
                self.render_spans(block, &mut out);
                out.push_str("</li>");
                continue;
            }

            match block.kind.as_str() {
                "block" => self.render_text_block(block, &mut out),
                "image" => self.render_image(block, &mut out),
                // Unregistered kind: pass the children through in the most
                // generic container instead of dropping them
                _ => {
                    if !block.children.is_empty() {
                        out.push_str("<div>");
                        self.render_spans(block, &mut out);
                        out.push_str("</div>");
                    }
                }
            }
        }

        if let Some(tag) = open_list {
            let _ = write!(out, "</{tag}>");
        }

        out
    }

    /// Render a `block`-kind node according to its style.
    fn render_text_block(&self, block: &RichTextBlock, out: &mut String) {
        let tag = match block.style.as_deref() {
            Some("h1") => "h1",
            Some("h2") => "h2",
            Some("h3") => "h3",
            Some("h4") => "h4",
            Some("blockquote") => "blockquote",
            Some("normal") | None => "p",
            // Unregistered style: generic container
            Some(_) => "div",
        };
        let _ = write!(out, "<{tag}>");
        self.render_spans(block, out);
        let _ = write!(out, "</{tag}>");
    }

    /// Render an image block, skipping nodes without an asset reference.
    fn render_image(&self, block: &RichTextBlock, out: &mut String) {
        let Some(asset) = &block.asset else {
            return;
        };
        if asset.reference.is_empty() {
            return;
        }

        let src = (self.resolve_asset)(&asset.reference);
        let alt = block.alt.as_deref().unwrap_or("Image");
        let _ = write!(
            out,
            r#"<img src="{}" alt="{}" width="{IMAGE_WIDTH}">"#,
            escape_html(&src),
            escape_html(alt)
        );
    }

    /// Render a block's span children with their marks applied.
    fn render_spans(&self, block: &RichTextBlock, out: &mut String) {
        for span in &block.children {
            render_span(span, &block.mark_defs, out);
        }
    }
}

/// Render one span, nesting mark wrappers in the fixed precedence order.
fn render_span(span: &Span, mark_defs: &[MarkDef], out: &mut String) {
    // Link annotation, if any, is the outermost wrapper
    let link = span.marks.iter().find_map(|mark| {
        mark_defs
            .iter()
            .find(|def| def.key == *mark && def.kind == "link")
            .and_then(|def| def.href.as_deref())
    });

    if let Some(href) = link {
        let _ = write!(out, r#"<a href="{}""#, escape_html(href));
        // Path-relative targets stay in-tab; everything else opens a new
        // tab with the referrer cut
        if !href.starts_with('/') {
            out.push_str(r#" target="_blank" rel="noopener noreferrer""#);
        }
        out.push('>');
    }

    let mut open = Vec::new();
    for (mark, tag) in DECORATOR_PRECEDENCE {
        if span.marks.iter().any(|m| m == mark) {
            let _ = write!(out, "<{tag}>");
            open.push(*tag);
        }
    }

    // Marks that are neither known decorators nor resolvable annotations
    // contribute no wrapper; the text always renders
    out.push_str(&escape_html(&span.text));

    for tag in open.iter().rev() {
        let _ = write!(out, "</{tag}>");
    }
    if link.is_some() {
        out.push_str("</a>");
    }
}

/// Escape text for inclusion in HTML bodies and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssetRef;
    use pretty_assertions::assert_eq;

    fn text_block(style: &str, text: &str, marks: &[&str]) -> RichTextBlock {
        RichTextBlock {
            kind: "block".to_owned(),
            style: Some(style.to_owned()),
            children: vec![Span {
                kind: "span".to_owned(),
                text: text.to_owned(),
                marks: marks.iter().map(|m| (*m).to_owned()).collect(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        let renderer = HtmlRenderer::new();
        assert_eq!(renderer.render(&[]), "");
        assert_eq!(renderer.render_opt(None), "");
    }

    #[test]
    fn test_paragraph_and_headings() {
        let renderer = HtmlRenderer::new();
        let blocks = vec![
            text_block("h2", "Our Process", &[]),
            text_block("normal", "We listen first.", &[]),
        ];
        assert_eq!(
            renderer.render(&blocks),
            "<h2>Our Process</h2><p>We listen first.</p>"
        );
    }

    #[test]
    fn test_missing_style_defaults_to_paragraph() {
        let renderer = HtmlRenderer::new();
        let mut block = text_block("normal", "text", &[]);
        block.style = None;
        assert_eq!(renderer.render(&[block]), "<p>text</p>");
    }

    #[test]
    fn test_unknown_style_renders_generic_container() {
        let renderer = HtmlRenderer::new();
        let blocks = vec![text_block("h7", "still visible", &[])];
        assert_eq!(renderer.render(&blocks), "<div>still visible</div>");
    }

    #[test]
    fn test_unknown_block_kind_passthrough() {
        let renderer = HtmlRenderer::new();
        let mut block = text_block("normal", "callout text", &[]);
        block.kind = "callout".to_owned();
        assert_eq!(renderer.render(&[block]), "<div>callout text</div>");
    }

    #[test]
    fn test_text_is_escaped() {
        let renderer = HtmlRenderer::new();
        let blocks = vec![text_block("normal", "a < b & \"c\"", &[])];
        assert_eq!(
            renderer.render(&blocks),
            "<p>a &lt; b &amp; &quot;c&quot;</p>"
        );
    }

    #[test]
    fn test_triple_mark_nesting_order_is_fixed() {
        let renderer = HtmlRenderer::new();
        // Marks listed in a scrambled order must still nest strong > em > code
        let blocks = vec![text_block("normal", "urgent", &["code", "strong", "em"])];
        let expected = "<p><strong><em><code>urgent</code></em></strong></p>";
        assert_eq!(renderer.render(&blocks), expected);

        let blocks = vec![text_block("normal", "urgent", &["em", "code", "strong"])];
        assert_eq!(renderer.render(&blocks), expected);
    }

    #[test]
    fn test_unknown_mark_renders_children_verbatim() {
        let renderer = HtmlRenderer::new();
        let blocks = vec![text_block("normal", "plain", &["highlight"])];
        assert_eq!(renderer.render(&blocks), "<p>plain</p>");
    }

    fn link_block(href: &str, text: &str) -> RichTextBlock {
        RichTextBlock {
            kind: "block".to_owned(),
            style: Some("normal".to_owned()),
            children: vec![Span {
                kind: "span".to_owned(),
                text: text.to_owned(),
                marks: vec!["l1".to_owned()],
            }],
            mark_defs: vec![MarkDef {
                key: "l1".to_owned(),
                kind: "link".to_owned(),
                href: Some(href.to_owned()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_internal_link_has_no_new_tab_attributes() {
        let renderer = HtmlRenderer::new();
        let html = renderer.render(&[link_block("/contact", "Get in touch")]);
        assert_eq!(html, r#"<p><a href="/contact">Get in touch</a></p>"#);
        assert!(!html.contains("target="));
        assert!(!html.contains("rel="));
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let renderer = HtmlRenderer::new();
        let html = renderer.render(&[link_block("https://sra.org.uk", "SRA")]);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_link_rule_holds_under_decorators() {
        let renderer = HtmlRenderer::new();
        let mut block = link_block("https://example.com", "bold link");
        block.children[0].marks.push("strong".to_owned());
        let html = renderer.render(&[block]);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("<strong>bold link</strong>"));
    }

    #[test]
    fn test_bullet_list_grouping() {
        let renderer = HtmlRenderer::new();
        let mut a = text_block("normal", "First", &[]);
        a.list_item = Some("bullet".to_owned());
        let mut b = text_block("normal", "Second", &[]);
        b.list_item = Some("bullet".to_owned());
        let after = text_block("normal", "Done", &[]);

        assert_eq!(
            renderer.render(&[a, b, after]),
            "<ul><li>First</li><li>Second</li></ul><p>Done</p>"
        );
    }

    #[test]
    fn test_numbered_list_grouping() {
        let renderer = HtmlRenderer::new();
        let mut a = text_block("normal", "Step one", &[]);
        a.list_item = Some("number".to_owned());
        let mut b = text_block("normal", "Step two", &[]);
        b.list_item = Some("number".to_owned());

        assert_eq!(
            renderer.render(&[a, b]),
            "<ol><li>Step one</li><li>Step two</li></ol>"
        );
    }

    #[test]
    fn test_list_kind_change_closes_previous_list() {
        let renderer = HtmlRenderer::new();
        let mut a = text_block("normal", "bullet", &[]);
        a.list_item = Some("bullet".to_owned());
        let mut b = text_block("normal", "number", &[]);
        b.list_item = Some("number".to_owned());

        assert_eq!(
            renderer.render(&[a, b]),
            "<ul><li>bullet</li></ul><ol><li>number</li></ol>"
        );
    }

    #[test]
    fn test_image_without_asset_renders_nothing() {
        let renderer = HtmlRenderer::new();
        let block = RichTextBlock {
            kind: "image".to_owned(),
            alt: Some("orphan".to_owned()),
            ..Default::default()
        };
        assert_eq!(renderer.render(&[block]), "");
    }

    #[test]
    fn test_image_with_asset_uses_resolver() {
        let renderer = HtmlRenderer::new().with_asset_urls(|reference| {
            format!("https://cdn.example.com/{reference}?w=800")
        });
        let block = RichTextBlock {
            kind: "image".to_owned(),
            asset: Some(AssetRef {
                reference: "image-abc-800x600-jpg".to_owned(),
            }),
            alt: Some("Our office".to_owned()),
            ..Default::default()
        };
        let html = renderer.render(&[block]);
        assert_eq!(
            html,
            r#"<img src="https://cdn.example.com/image-abc-800x600-jpg?w=800" alt="Our office" width="800">"#
        );
    }

    #[test]
    fn test_image_alt_fallback() {
        let renderer = HtmlRenderer::new();
        let block = RichTextBlock {
            kind: "image".to_owned(),
            asset: Some(AssetRef {
                reference: "image-abc-800x600-jpg".to_owned(),
            }),
            ..Default::default()
        };
        assert!(renderer.render(&[block]).contains(r#"alt="Image""#));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let renderer = HtmlRenderer::new();
        let blocks = vec![text_block("normal", "same", &["strong", "em", "code"])];
        let first = renderer.render(&blocks);
        let second = renderer.render(&blocks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_escape_html_table() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }
}
