//! Allow-list HTML sanitization.
//!
//! Article bodies come from the CMS and may contain raw HTML. Before the
//! fragment reaches a page it is cleaned with `ammonia`: tags and attributes
//! outside the [`SanitizePolicy`] are removed, URLs are restricted to the
//! allowed schemes and `<script>`/`<style>` are dropped together with their
//! content.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use ammonia::{Builder, UrlRelative};

const ARTICLE_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "div", "span", "ul", "ol", "li",
    "blockquote", "pre", "code", "table", "thead", "tbody", "tr", "th", "td", "strong", "em",
    "del", "s", "a", "img", "iframe", "button", "input",
];

const ARTICLE_GENERIC_ATTRIBUTES: &[&str] = &["class", "title"];

const ARTICLE_TAG_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "target", "rel"]),
    ("img", &["src", "alt", "width", "height"]),
    (
        "iframe",
        &[
            "src",
            "width",
            "height",
            "allow",
            "allowfullscreen",
            "frameborder",
            "scrolling",
        ],
    ),
    ("button", &["type", "data-code"]),
    ("input", &["type", "checked", "disabled"]),
    ("ol", &["start"]),
];

const ARTICLE_URL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Tags removed together with everything inside them.
const CONTENT_STRIPPED_TAGS: &[&str] = &["script", "style"];

/// Allow-list applied by [`sanitize`].
///
/// The default policy covers markdown output, copy buttons, task list
/// checkboxes and embedded iframes (maps, videos).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizePolicy {
    tags: BTreeSet<String>,
    generic_attributes: BTreeSet<String>,
    tag_attributes: BTreeMap<String, BTreeSet<String>>,
    url_schemes: BTreeSet<String>,
}

impl SanitizePolicy {
    /// Allow an additional tag.
    #[must_use]
    pub fn allow_tag(mut self, tag: &str) -> Self {
        self.tags.insert(tag.to_ascii_lowercase());
        self
    }

    /// Allow an attribute on a specific tag.
    #[must_use]
    pub fn allow_attribute(mut self, tag: &str, attribute: &str) -> Self {
        self.tag_attributes
            .entry(tag.to_ascii_lowercase())
            .or_default()
            .insert(attribute.to_ascii_lowercase());
        self
    }

    /// Allow an additional URL scheme in `href`/`src`.
    #[must_use]
    pub fn allow_url_scheme(mut self, scheme: &str) -> Self {
        self.url_schemes.insert(scheme.to_ascii_lowercase());
        self
    }

    /// Whether `tag` survives sanitization.
    #[must_use]
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    fn builder(&self) -> Builder<'_> {
        let tags: HashSet<&str> = self.tags.iter().map(String::as_str).collect();
        let generic: HashSet<&str> = self.generic_attributes.iter().map(String::as_str).collect();
        let per_tag: HashMap<&str, HashSet<&str>> = self
            .tag_attributes
            .iter()
            .map(|(tag, attrs)| (tag.as_str(), attrs.iter().map(String::as_str).collect()))
            .collect();
        let schemes: HashSet<&str> = self.url_schemes.iter().map(String::as_str).collect();
        // A tag cannot be both allowed and content-stripped.
        let stripped: HashSet<&str> = CONTENT_STRIPPED_TAGS
            .iter()
            .copied()
            .filter(|tag| !self.tags.contains(*tag))
            .collect();

        let mut builder = Builder::empty();
        builder
            .tags(tags)
            .generic_attributes(generic)
            .tag_attributes(per_tag)
            .url_schemes(schemes)
            .url_relative(UrlRelative::PassThrough)
            .clean_content_tags(stripped)
            .link_rel(None)
            .strip_comments(true);
        builder
    }
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self {
            tags: owned_set(ARTICLE_TAGS),
            generic_attributes: owned_set(ARTICLE_GENERIC_ATTRIBUTES),
            tag_attributes: ARTICLE_TAG_ATTRIBUTES
                .iter()
                .map(|&(tag, attrs)| (tag.to_owned(), owned_set(attrs)))
                .collect(),
            url_schemes: owned_set(ARTICLE_URL_SCHEMES),
        }
    }
}

fn owned_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Clean an HTML fragment against `policy`.
///
/// Never fails: anything the policy does not allow is removed and the
/// remaining markup is re-serialized.
#[must_use]
pub fn sanitize(html: &str, policy: &SanitizePolicy) -> String {
    policy.builder().clean(html).to_string()
}
