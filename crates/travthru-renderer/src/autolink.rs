//! GFM extended autolinks.
//!
//! Bare `http://`, `https://` and `www.` URLs in paragraph text become links.
//! Trailing punctuation is not part of the URL, and a closing parenthesis is
//! only kept when it balances an opening one inside the URL.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::state::escape_html;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)[^\s<]+").unwrap());

const TRAILING_PUNCTUATION: &[char] = &['?', '!', '.', ',', ':', ';', '*', '_', '~', '\'', '"'];

/// Escape `text` into `out`, wrapping bare URLs in `<a>` tags.
pub(crate) fn push_linkified(text: &str, out: &mut String) {
    let mut last = 0;
    for m in URL_PATTERN.find_iter(text) {
        let url = trim_url(m.as_str());
        if url.len() <= 4 || url.ends_with("://") {
            continue;
        }
        let end = m.start() + url.len();

        out.push_str(&escape_html(&text[last..m.start()]));
        let href = if url.len() >= 4 && url[..4].eq_ignore_ascii_case("www.") {
            format!("http://{url}")
        } else {
            url.to_owned()
        };
        let _ = write!(
            out,
            r#"<a href="{}">{}</a>"#,
            escape_html(&href),
            escape_html(url)
        );
        last = end;
    }
    out.push_str(&escape_html(&text[last..]));
}

fn trim_url(mut url: &str) -> &str {
    loop {
        if let Some(stripped) = url.strip_suffix(TRAILING_PUNCTUATION) {
            url = stripped;
        } else if url.ends_with(')') && url.matches(')').count() > url.matches('(').count() {
            url = &url[..url.len() - 1];
        } else {
            return url;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn linkify(text: &str) -> String {
        let mut out = String::new();
        push_linkified(text, &mut out);
        out
    }

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(linkify("Fares < RM 100 & up"), "Fares &lt; RM 100 &amp; up");
    }

    #[test]
    fn test_https_url() {
        assert_eq!(
            linkify("Book at https://wa.me/60107198186 now"),
            r#"Book at <a href="https://wa.me/60107198186">https://wa.me/60107198186</a> now"#
        );
    }

    #[test]
    fn test_www_url_gets_scheme() {
        assert_eq!(
            linkify("see www.klia.com.my"),
            r#"see <a href="http://www.klia.com.my">www.klia.com.my</a>"#
        );
    }

    #[test]
    fn test_trailing_punctuation_excluded() {
        assert_eq!(
            linkify("Visit https://example.com."),
            r#"Visit <a href="https://example.com">https://example.com</a>."#
        );
    }

    #[test]
    fn test_unbalanced_paren_excluded() {
        assert_eq!(
            linkify("(https://example.com/a)"),
            r#"(<a href="https://example.com/a">https://example.com/a</a>)"#
        );
    }

    #[test]
    fn test_balanced_paren_kept() {
        assert_eq!(
            linkify("https://en.wikipedia.org/wiki/KLIA_(airport)"),
            r#"<a href="https://en.wikipedia.org/wiki/KLIA_(airport)">https://en.wikipedia.org/wiki/KLIA_(airport)</a>"#
        );
    }

    #[test]
    fn test_quote_in_url_is_escaped() {
        let out = linkify(r#"https://example.com/?q=a"b"#);
        assert!(out.contains(r#"href="https://example.com/?q=a&quot;b""#));
    }
}
