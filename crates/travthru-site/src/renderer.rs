//! Article body pipeline: markdown → copy-button enhancement → sanitization.

use std::panic::{AssertUnwindSafe, catch_unwind};

use travthru_renderer::{
    HtmlBackend, MarkdownRenderer, SanitizePolicy, enhance_code_blocks, sanitize,
};

/// Fragment shown in place of a body that failed to render.
pub const RENDER_ERROR_FRAGMENT: &str = "<p>Error rendering content</p>";

/// Markdown to safe HTML, given the sanitization policy.
type Pipeline = fn(&str, &SanitizePolicy) -> String;

/// Renders article markdown into HTML that is safe to inject into a page.
#[derive(Debug, Clone)]
pub struct ArticleRenderer {
    policy: SanitizePolicy,
    pipeline: Pipeline,
}

impl Default for ArticleRenderer {
    fn default() -> Self {
        Self {
            policy: SanitizePolicy::default(),
            pipeline: render_article_body,
        }
    }
}

impl ArticleRenderer {
    /// Create a renderer with the default article sanitization policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom sanitization policy.
    #[must_use]
    pub fn with_policy(mut self, policy: SanitizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the body pipeline.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Run the full body pipeline.
    ///
    /// Empty content yields an empty fragment. A panic anywhere in the
    /// pipeline is caught, logged, and replaced by [`RENDER_ERROR_FRAGMENT`].
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let pipeline = self.pipeline;
        let result = catch_unwind(AssertUnwindSafe(|| pipeline(markdown, &self.policy)));
        result.unwrap_or_else(|panic| {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| (*s).to_owned())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_owned());
            tracing::error!(error = %reason, "Markdown rendering failed");
            RENDER_ERROR_FRAGMENT.to_owned()
        })
    }
}

/// Markdown, then copy buttons, then sanitization.
fn render_article_body(markdown: &str, policy: &SanitizePolicy) -> String {
    let html = MarkdownRenderer::<HtmlBackend>::new().render_markdown(markdown);
    sanitize(&enhance_code_blocks(&html), policy)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use travthru_renderer::decode_code_payload;

    use super::*;

    fn data_code_payloads(html: &str) -> Vec<String> {
        html.split("data-code=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(|payload| decode_code_payload(payload).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(ArticleRenderer::new().render(""), "");
    }

    #[test]
    fn test_heading_and_code_block() {
        let html = ArticleRenderer::new().render("# Title\n\n```js\nconsole.log(1)\n```");

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains(r#"<div class="code-block">"#));
        assert!(html.contains(r#"class="copy-code-btn""#));
        assert!(html.contains(r#"<code class="language-js">"#));
        assert!(!html.contains("```"));
        assert_eq!(data_code_payloads(&html), vec!["console.log(1)"]);
    }

    #[test]
    fn test_single_code_block_payload() {
        let html = ArticleRenderer::new().render("```python\nprint(\"hi\")\n```");

        assert_eq!(html.matches("copy-code-btn").count(), 1);
        assert_eq!(data_code_payloads(&html), vec![r#"print("hi")"#]);
    }

    #[test]
    fn test_adversarial_inputs_neutralized() {
        let renderer = ArticleRenderer::new();
        for input in [
            "<script>alert(1)</script>",
            "<img src=x onerror=alert(1)>",
            "[click](javascript:alert(1))",
            "<a href=\"javascript:alert(1)\">x</a>",
            "<div onclick=\"steal()\">hi</div>",
            "<iframe src=\"javascript:alert(1)\"></iframe>",
            "```\n</code></pre><script>alert(1)</script>\n```",
            "<button onclick=\"x()\" data-code=\"y\">b</button>",
            "<style>body{display:none}</style>",
        ] {
            let html = renderer.render(input).to_ascii_lowercase();
            assert!(!html.contains("<script"), "{input} -> {html}");
            assert!(!html.contains("onerror="), "{input} -> {html}");
            assert!(!html.contains("onclick="), "{input} -> {html}");
            assert!(!html.contains("javascript:"), "{input} -> {html}");
            assert!(!html.contains("<style"), "{input} -> {html}");
        }
    }

    #[test]
    fn test_soft_breaks_and_tables() {
        let html = ArticleRenderer::new()
            .render("Line one\nLine two\n\n| Route | Fare |\n|---|---|\n| KLIA | RM 99 |");

        assert!(html.contains("Line one<br>"));
        assert!(html.contains("<th>Route</th>"));
        assert!(html.contains("<td>RM 99</td>"));
    }

    #[test]
    fn test_failing_pipeline_yields_error_fragment() {
        let renderer = ArticleRenderer::new().with_pipeline(|_, _| panic!("renderer exploded"));

        assert_eq!(renderer.render("# Title"), RENDER_ERROR_FRAGMENT);
    }

    #[test]
    fn test_failing_pipeline_skipped_for_empty_content() {
        let renderer = ArticleRenderer::new().with_pipeline(|_, _| panic!("renderer exploded"));

        assert_eq!(renderer.render(""), "");
    }

    #[test]
    fn test_custom_policy() {
        let renderer =
            ArticleRenderer::new().with_policy(SanitizePolicy::default().allow_tag("sup"));

        assert!(renderer.render("x<sup>2</sup>").contains("<sup>2</sup>"));
        assert!(!ArticleRenderer::new().render("x<sup>2</sup>").contains("<sup>"));
    }
}
