//! HTML documents for the article page states.
//!
//! Pages are assembled with `String` + `write!`. Every value that did not
//! come out of the sanitizer is escaped here; the body is inserted verbatim.

use std::fmt::Write;

use travthru_renderer::escape_html as escape;

use crate::page::{ArticlePage, ArticleView, RelatedArticle};
use crate::site::SiteSettings;

/// Path of the copy/share script served next to the pages.
pub const ARTICLE_SCRIPT_PATH: &str = "/static/article.js";

/// Article listing the back links point to.
const ARTICLES_INDEX: &str = "/articles";

/// Typography for rendered bodies and the code-block copy control.
const ARTICLE_CSS: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#111827}
.hero{height:24rem;overflow:hidden}.hero img{width:100%;height:100%;object-fit:cover}
.article{max-width:56rem;margin:0 auto;padding:3rem 1rem}
.back-link{display:inline-block;color:#6b7280;font-size:.875rem;margin-bottom:1.5rem;text-decoration:none}
.article-title{font-family:serif;font-size:2.5rem;line-height:1.2;margin:0 0 1.5rem}
.article-meta{display:flex;flex-wrap:wrap;gap:1rem;align-items:center;color:#6b7280;font-size:.875rem;margin-bottom:1.5rem}
.share-btn{background:none;border:0;color:#b8972e;cursor:pointer;font:inherit}
.article-excerpt{font-size:1.25rem;color:#4b5563;border-left:4px solid #d4af37;padding-left:1rem}
.article-content h1{font-size:2.25rem;font-weight:700;margin:2rem 0 1rem;line-height:1.2;font-family:serif}
.article-content h2{font-size:1.75rem;font-weight:600;margin:2rem 0 1rem;border-bottom:3px solid #d4af37;padding-bottom:.5rem;font-family:serif}
.article-content h3{font-size:1.375rem;font-weight:600;margin:1.5rem 0 .75rem;font-family:serif}
.article-content h4{font-size:1.125rem;font-weight:600;margin:1rem 0 .5rem}
.article-content p,.article-content li{line-height:1.8;color:#374151;font-size:1.125rem}
.article-content p{margin-bottom:1.25rem}
.article-content ul{list-style:disc;margin:0 0 1.25rem 1.5rem}
.article-content ol{list-style:decimal;margin:0 0 1.25rem 1.5rem}
.article-content a{color:#d4af37;text-decoration:underline}
.article-content a:hover{color:#b8972e}
.article-content blockquote{border-left:4px solid #d4af37;margin:1.5rem 0;padding:1.25rem 1.5rem;background:linear-gradient(to right,#fefce8,transparent);border-radius:0 12px 12px 0;color:#78716c;font-style:italic}
.article-content code{background:#f3f4f6;padding:.2rem .5rem;border-radius:4px;font-family:Consolas,Monaco,monospace;font-size:.9rem;color:#dc2626}
.article-content pre{background:#1e293b;color:#e2e8f0;padding:1.5rem;border-radius:12px;overflow-x:auto;margin:0;font-size:14px;line-height:1.6}
.article-content pre code{background:transparent;padding:0;color:inherit;font-size:.875rem}
.article-content img{max-width:100%;height:auto;border-radius:16px;margin:1.5rem 0}
.article-content table{width:100%;border-collapse:collapse;margin:1.5rem 0}
.article-content th{background:#1f2937;color:#fff;padding:1rem;text-align:left}
.article-content td{border:1px solid #e5e7eb;padding:.875rem 1rem}
.article-content tr:nth-child(even){background:#f9fafb}
.article-content hr{border:none;border-top:2px solid #e5e7eb;margin:2.5rem 0}
.code-block{position:relative;margin:1.5rem 0}
.copy-code-btn{position:absolute;right:12px;top:12px;background:rgba(255,255,255,.15);color:#fff;border:1px solid rgba(255,255,255,.3);padding:6px 12px;border-radius:6px;font-size:12px;cursor:pointer;opacity:.8}
.copy-code-btn:hover{opacity:1;background:rgba(255,255,255,.25)}
.cta{margin-top:3rem;padding:2rem;border-radius:1rem;text-align:center;background:#111827;color:#fff}
.cta a{display:inline-block;padding:.75rem 2rem;background:#d4af37;color:#111827;font-weight:700;border-radius:.5rem;text-decoration:none}
.related{background:#fff;padding:3rem 1rem}.related-grid{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fit,minmax(18rem,1fr));max-width:56rem;margin:0 auto}
.related-card{display:flex;gap:1rem;padding:1rem;background:#f9fafb;border-radius:.75rem;text-decoration:none;color:inherit}
.related-card img{width:6rem;height:6rem;object-fit:cover;border-radius:.5rem}
.status{padding:8rem 1rem 4rem;text-align:center}
";

/// Render the complete HTML document for a page state.
#[must_use]
pub fn render_page(page: &ArticlePage, settings: &SiteSettings) -> String {
    let mut html = String::with_capacity(8192);

    match page {
        ArticlePage::Loading => {
            render_head(&mut html, &settings.site_name, None);
            html.push_str("<div class=\"status\" aria-busy=\"true\">\n");
            html.push_str("<div class=\"spinner\"></div>\n");
            html.push_str("<p>Loading article...</p>\n</div>\n");
        }
        ArticlePage::NotFound => {
            let title = format!("Article Not Found | {}", settings.site_name);
            render_head(&mut html, &title, None);
            render_not_found(&mut html);
        }
        ArticlePage::Found(view) => {
            render_head(&mut html, &view.meta.title, Some(&view.meta.description));
            render_article(&mut html, view, &settings.whatsapp_url);
            render_related(&mut html, &view.related);
        }
    }

    html.push_str("</body>\n</html>");
    html
}

/// Document head. Article styles are only included for found articles.
fn render_head(html: &mut String, title: &str, description: Option<&str>) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    if let Some(description) = description {
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            escape(description)
        );
        let _ = writeln!(html, "<style>\n{ARTICLE_CSS}</style>");
    }
    let _ = writeln!(html, "<script src=\"{ARTICLE_SCRIPT_PATH}\" defer></script>");
    html.push_str("</head>\n<body>\n");
}

fn render_not_found(html: &mut String) {
    html.push_str("<div class=\"status\">\n");
    html.push_str("<h1>Article Not Found</h1>\n");
    html.push_str(
        "<p>The article you&#x27;re looking for doesn&#x27;t exist or has been removed.</p>\n",
    );
    let _ = writeln!(html, "<a href=\"{ARTICLES_INDEX}\">← Back to Articles</a>");
    html.push_str("</div>\n");
}

fn render_article(html: &mut String, view: &ArticleView, whatsapp_url: &str) {
    let article = &view.article;

    // Hero
    let _ = writeln!(
        html,
        "<section class=\"hero\"><img src=\"{}\" alt=\"{}\"></section>",
        escape(&article.image),
        escape(&article.title)
    );

    html.push_str("<article class=\"article\">\n");
    let _ = writeln!(
        html,
        "<a class=\"back-link\" href=\"{ARTICLES_INDEX}\">← Back to Articles</a>"
    );

    // Header
    html.push_str("<header>\n");
    let _ = writeln!(
        html,
        "<h1 class=\"article-title\">{}</h1>",
        escape(&article.title)
    );
    html.push_str("<div class=\"article-meta\">\n");
    let _ = writeln!(
        html,
        "<span class=\"article-author\">{}</span>",
        escape(&article.author)
    );
    match article.created_at {
        Some(created_at) => {
            let _ = writeln!(
                html,
                "<time datetime=\"{}\">{}</time>",
                created_at.to_rfc3339(),
                escape(&article.published_label)
            );
        }
        None => {
            let _ = writeln!(html, "<span>{}</span>", escape(&article.published_label));
        }
    }
    let _ = writeln!(
        html,
        "<button type=\"button\" class=\"share-btn\" data-share-title=\"{}\" data-share-text=\"{}\">Share</button>",
        escape(&article.title),
        escape(&article.excerpt)
    );
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<p class=\"article-excerpt\">{}</p>",
        escape(&article.excerpt)
    );
    html.push_str("</header>\n");

    // Body (already sanitized)
    html.push_str("<div class=\"article-content\">\n");
    html.push_str(&view.content);
    html.push_str("\n</div>\n");

    // Booking call-to-action
    html.push_str("<div class=\"cta\">\n");
    html.push_str("<h3>Need a <span>Ride</span>?</h3>\n");
    html.push_str("<p>Book your premium transfer service with TRAVTHRU today!</p>\n");
    let _ = writeln!(
        html,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Book on WhatsApp</a>",
        escape(whatsapp_url)
    );
    html.push_str("</div>\n");

    html.push_str("</article>\n");
}

/// Related cards; the whole section is omitted when the list is empty.
fn render_related(html: &mut String, related: &[RelatedArticle]) {
    if related.is_empty() {
        return;
    }

    html.push_str("<section class=\"related\">\n");
    html.push_str("<h2>Related Articles</h2>\n");
    html.push_str("<div class=\"related-grid\">\n");
    for card in related {
        let _ = writeln!(
            html,
            "<a class=\"related-card\" href=\"{}\"><img src=\"{}\" alt=\"{}\"><div><h3>{}</h3><p>{}</p></div></a>",
            escape(&card.href),
            escape(&card.image),
            escape(&card.title),
            escape(&card.title),
            escape(&card.excerpt)
        );
    }
    html.push_str("</div>\n</section>\n");
}
