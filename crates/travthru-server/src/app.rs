//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new().route("/api/articles/{slug}", get(handlers::api::get_article));

    Router::new()
        .route("/articles/{slug}", get(handlers::pages::get_article_page))
        .route("/health", get(handlers::health::get_health))
        .merge(api_routes)
        .merge(static_files::static_router())
        .fallback(handlers::pages::not_found_page)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;
    use travthru_site::{ArticleSite, SiteSettings};
    use travthru_store::{Article, ArticleStore, MockStore, StoreErrorKind};

    use super::*;

    fn router(store: MockStore) -> Router {
        let site = ArticleSite::new(
            Arc::new(store) as Arc<dyn ArticleStore>,
            SiteSettings::default(),
        );
        create_router(Arc::new(AppState {
            site: Arc::new(site),
        }))
    }

    fn store() -> MockStore {
        MockStore::new()
            .with_article(Article {
                slug: "klia-airport-transfer-guide".to_owned(),
                title: "KLIA Airport Transfer Guide".to_owned(),
                excerpt: "Getting from KLIA to the city".to_owned(),
                content: "## Pickup\n\n```\nDoor 4\n```\n\n<script>alert(1)</script>".to_owned(),
                published: true,
                ..Article::default()
            })
            .with_published("genting-highlands-day-trip", "Genting Highlands Day Trip")
            .with_unpublished("draft", "Draft")
    }

    async fn get(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_article_page() {
        let response = get(router(store()), "/articles/klia-airport-transfer-guide").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        let html = body_text(response).await;
        assert!(html.contains("<title>KLIA Airport Transfer Guide | TRAVTHRU</title>"));
        assert!(html.contains("<h2>Pickup</h2>"));
        assert!(html.contains("copy-code-btn"));
        assert!(html.contains("Genting Highlands Day Trip"));
        assert!(!html.contains("<script>alert"));
    }

    #[tokio::test]
    async fn test_article_page_not_found() {
        let response = get(router(store()), "/articles/draft").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("Article Not Found"));
        assert!(!html.contains("article-content"));
    }

    #[tokio::test]
    async fn test_article_page_store_failure() {
        let store = store().with_failure(StoreErrorKind::Unavailable);

        let response = get(router(store), "/articles/klia-airport-transfer-guide").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_security_headers() {
        let response = get(router(store()), "/articles/klia-airport-transfer-guide").await;
        let headers = response.headers();

        assert!(
            headers["content-security-policy"]
                .to_str()
                .unwrap()
                .contains("script-src 'self'")
        );
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_api_article() {
        let response = get(router(store()), "/api/articles/klia-airport-transfer-guide").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["meta"]["title"], "KLIA Airport Transfer Guide | TRAVTHRU");
        assert_eq!(json["article"]["publishedLabel"], "Recently Published");
        assert_eq!(json["related"][0]["href"], "/articles/genting-highlands-day-trip");
        assert!(!json["content"].as_str().unwrap().contains("<script"));
    }

    #[tokio::test]
    async fn test_api_article_not_found() {
        let response = get(router(store()), "/api/articles/missing").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"], "Article not found");
        assert_eq!(json["slug"], "missing");
    }

    #[tokio::test]
    async fn test_article_script() {
        let response = get(router(store()), "/static/article.js").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/javascript; charset=utf-8"
        );
        assert!(body_text(response).await.contains("copy-code-btn"));
    }

    #[tokio::test]
    async fn test_health() {
        let response = get(router(MockStore::new()), "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found_page() {
        let response = get(router(MockStore::new()), "/articles/").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Article Not Found"));
    }
}
