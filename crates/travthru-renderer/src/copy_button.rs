//! Copy-to-clipboard enhancement for rendered code blocks.
//!
//! Every `<pre><code ...>...</code></pre>` unit is wrapped in a
//! `<div class="code-block">` together with a button whose `data-code`
//! attribute carries the plain code text, percent-encoded with the same
//! reserved set as `encodeURIComponent`. Client script decodes the payload
//! and writes it to the clipboard.

use std::borrow::Cow;
use std::str::Utf8Error;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use regex::{Captures, Regex};

/// Class carried by every generated copy button.
pub const COPY_BUTTON_CLASS: &str = "copy-code-btn";

/// Characters `encodeURIComponent` leaves alone.
const CODE_PAYLOAD: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pre><code([^>]*)>(.*?)</code></pre>").unwrap());

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Error decoding a `data-code` payload.
#[derive(Debug, thiserror::Error)]
#[error("copy payload is not valid UTF-8: {0}")]
pub struct CopyPayloadError(#[from] Utf8Error);

/// Wrap every code block in `html` with a copy button.
///
/// The original `<pre><code>` markup (attributes and inner HTML) is kept
/// byte-for-byte inside the wrapper. Fragments without code blocks are
/// returned unchanged, and the pass is stateless so it can be applied to
/// any fragment any number of times.
#[must_use]
pub fn enhance_code_blocks(html: &str) -> String {
    CODE_BLOCK
        .replace_all(html, |caps: &Captures<'_>| {
            let attrs = &caps[1];
            let inner = &caps[2];
            format!(
                r#"<div class="code-block"><button type="button" class="{COPY_BUTTON_CLASS}" data-code="{}">Copy</button><pre><code{attrs}>{inner}</code></pre></div>"#,
                encode_code_payload(&plain_code_text(inner))
            )
        })
        .into_owned()
}

/// Percent-encode code text for a `data-code` attribute.
///
/// The output contains no `"`, `<`, `>` or `&`, so it is safe inside a
/// double-quoted attribute without further escaping.
#[must_use]
pub fn encode_code_payload(code: &str) -> String {
    utf8_percent_encode(code, CODE_PAYLOAD).to_string()
}

/// Decode a `data-code` payload back into the code text.
///
/// # Errors
///
/// Returns [`CopyPayloadError`] if the decoded bytes are not valid UTF-8.
pub fn decode_code_payload(payload: &str) -> Result<String, CopyPayloadError> {
    Ok(percent_decode_str(payload).decode_utf8()?.into_owned())
}

/// Text a reader sees inside the block: tags removed, entities decoded,
/// renderer-added final newline dropped.
fn plain_code_text(inner: &str) -> String {
    let stripped = TAG.replace_all(inner, "");
    let decoded: Cow<'_, str> = html_escape::decode_html_entities(&stripped);
    let text: &str = &decoded;
    text.strip_suffix('\n').unwrap_or(text).to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wraps_code_block_with_button() {
        let html = r#"<pre><code class="language-python">print(&quot;hi&quot;)
</code></pre>"#;
        assert_eq!(
            enhance_code_blocks(html),
            "<div class=\"code-block\"><button type=\"button\" class=\"copy-code-btn\" \
             data-code=\"print(%22hi%22)\">Copy</button><pre><code class=\"language-python\">\
             print(&quot;hi&quot;)\n</code></pre></div>"
        );
    }

    #[test]
    fn test_fragment_without_code_unchanged() {
        let html = "<p>Book your <code>KLIA</code> transfer</p>";
        assert_eq!(enhance_code_blocks(html), html);
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(enhance_code_blocks(""), "");
    }

    #[test]
    fn test_each_block_gets_own_button() {
        let html = "<pre><code>a</code></pre><p>between</p><pre><code>b</code></pre>";
        let out = enhance_code_blocks(html);
        assert_eq!(out.matches(COPY_BUTTON_CLASS).count(), 2);
        assert!(out.contains(r#"data-code="a""#));
        assert!(out.contains(r#"data-code="b""#));
        assert!(out.contains("<p>between</p>"));
    }

    #[test]
    fn test_multiline_block_matched_non_greedy() {
        let html = "<pre><code>line 1\nline 2\n</code></pre>\n<pre><code>x</code></pre>";
        let out = enhance_code_blocks(html);
        assert!(out.contains(r#"data-code="line%201%0Aline%202""#));
        assert!(out.contains(r#"data-code="x""#));
    }

    #[test]
    fn test_nested_markup_stripped_from_payload() {
        let html = r#"<pre><code><span class="kw">let</span> x = 1;</code></pre>"#;
        let out = enhance_code_blocks(html);
        let payload = out
            .split("data-code=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        assert_eq!(decode_code_payload(payload).unwrap(), "let x = 1;");
        assert!(out.contains(r#"<span class="kw">let</span>"#));
    }

    #[test]
    fn test_payload_round_trips_special_characters() {
        let code = "if a < b && c > \"d\" {\n    println!('x');\n}";
        let encoded = encode_code_payload(code);
        assert!(!encoded.contains(['"', '<', '>', '&', '\n']));
        assert_eq!(decode_code_payload(&encoded).unwrap(), code);
    }

    #[test]
    fn test_unreserved_characters_not_encoded() {
        assert_eq!(encode_code_payload("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_code_payload("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(decode_code_payload("%FF%FE").is_err());
    }

    #[test]
    fn test_rendered_markdown_is_enhanced() {
        use crate::{HtmlBackend, MarkdownRenderer};

        let html =
            MarkdownRenderer::<HtmlBackend>::new().render_markdown("```sh\necho \"<ok>\" & ls\n```");
        let out = enhance_code_blocks(&html);
        assert!(out.contains(r#"<code class="language-sh">"#));
        assert!(out.contains(&format!(
            r#"data-code="{}""#,
            encode_code_payload("echo \"<ok>\" & ls")
        )));
    }
}
