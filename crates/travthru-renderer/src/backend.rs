//! Render backend trait.
//!
//! The generic [`MarkdownRenderer`](crate::MarkdownRenderer) handles document
//! structure (paragraphs, lists, tables, inline formatting) and delegates the
//! elements whose markup differs between output formats to a backend.

/// Format-specific rendering hooks.
pub trait RenderBackend {
    /// Render a fenced or indented code block.
    ///
    /// `content` is raw source text and must be escaped by the backend.
    fn code_block(lang: Option<&str>, content: &str, out: &mut String);

    /// Open a blockquote.
    fn blockquote_start(out: &mut String);

    /// Close a blockquote.
    fn blockquote_end(out: &mut String);

    /// Render an image with its collected alt text.
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Render a line break.
    ///
    /// Soft breaks inside a paragraph are routed here as well, so a single
    /// newline in the source becomes a visible break.
    fn hard_break(out: &mut String) {
        out.push_str("<br>\n");
    }

    /// Render a thematic break.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render a GFM task list checkbox.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
