//! Article body rendering for TRAVTHRU.
//!
//! Turns CMS-authored markdown into an HTML fragment that is safe to inject
//! into a page. The work is split into three independent stages:
//!
//! - [`MarkdownRenderer`]: markdown → HTML, with GFM tables, strikethrough,
//!   task lists, bare-URL autolinks and soft breaks rendered as `<br>`
//! - [`enhance_code_blocks`]: wraps every `<pre><code>` unit with a copy button
//!   carrying the percent-encoded code in `data-code`
//! - [`sanitize`]: strips the fragment down to a [`SanitizePolicy`] allow-list
//!
//! Format-specific output is delegated to a [`RenderBackend`]; [`HtmlBackend`]
//! produces the HTML5 used by the article page.
//!
//! # Example
//!
//! ```
//! use travthru_renderer::{HtmlBackend, MarkdownRenderer, SanitizePolicy, enhance_code_blocks, sanitize};
//!
//! let html = MarkdownRenderer::<HtmlBackend>::new().render_markdown("# Hello\n\n```js\nconsole.log(1)\n```");
//! let safe = sanitize(&enhance_code_blocks(&html), &SanitizePolicy::default());
//! assert!(safe.contains("copy-code-btn"));
//! ```

mod autolink;
mod backend;
mod copy_button;
mod html;
mod renderer;
mod sanitize;
mod state;

pub use backend::RenderBackend;
pub use copy_button::{
    COPY_BUTTON_CLASS, CopyPayloadError, decode_code_payload, encode_code_payload,
    enhance_code_blocks,
};
pub use html::HtmlBackend;
pub use renderer::MarkdownRenderer;
pub use sanitize::{SanitizePolicy, sanitize};
pub use state::escape_html;
