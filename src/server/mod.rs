//! Local server for page data and rendered articles

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Datelike;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::pages::page_data;
use crate::content::parse_sections;
use crate::data::{self, Category};
use crate::render::html::render_article_page;
use crate::render::legal::render_legal_page;
use crate::{Site, LEGAL_PAGES};

type SharedSite = Arc<Site>;

/// Build the router; anything not matched is served from the public directory
pub fn router(site: SharedSite) -> Router {
    let public = ServeDir::new(&site.public_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/api/pages/:id", get(page_handler))
        .route("/api/blog", get(blog_index_handler))
        .route("/api/testimonials/:category", get(testimonials_handler))
        .route("/api/portfolio/:category", get(portfolio_handler))
        .route("/blog/:slug", get(article_handler))
        .route("/legal/:id", get(legal_handler))
        .fallback_service(public)
        .layer(TraceLayer::new_for_http())
        .with_state(site)
}

/// Start the server
pub async fn start(site: Site, ip: &str, port: u16) -> Result<()> {
    let app = router(Arc::new(site));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn not_found(what: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("{} not found", what)).into_response()
}

/// Content loading reads files, so it runs on the blocking pool
async fn blocking<F>(load: F) -> Response
where
    F: FnOnce() -> Response + Send + 'static,
{
    match tokio::task::spawn_blocking(load).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Content task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn page_handler(State(site): State<SharedSite>, Path(id): Path<String>) -> Response {
    blocking(move || Json(page_data(&site.loader, &id)).into_response()).await
}

async fn blog_index_handler(State(site): State<SharedSite>) -> Response {
    blocking(move || Json(site.loader.all_blog_articles()).into_response()).await
}

async fn testimonials_handler(Path(category): Path<String>) -> Response {
    match category.parse::<Category>() {
        Ok(category) => Json(data::testimonials_by_category(category)).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, e).into_response(),
    }
}

async fn portfolio_handler(Path(category): Path<String>) -> Response {
    match category.parse::<Category>() {
        Ok(category) => Json(data::portfolio_by_category(category)).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, e).into_response(),
    }
}

async fn article_handler(State(site): State<SharedSite>, Path(slug): Path<String>) -> Response {
    blocking(move || match site.loader.blog_article(&slug) {
        Some(article) => Html(render_article_page(&article, &site.config)).into_response(),
        None => not_found("Article"),
    })
    .await
}

async fn legal_handler(State(site): State<SharedSite>, Path(id): Path<String>) -> Response {
    if !LEGAL_PAGES.contains(&id.as_str()) {
        return not_found("Page");
    }

    blocking(move || {
        let page = site.loader.markdown_content(&id);
        let sections = parse_sections(&page.content);
        let year = chrono::Local::now().year();
        Html(render_legal_page(
            &id,
            &page.front_matter,
            &sections,
            year,
            &site.config,
        ))
        .into_response()
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn site(dir: &TempDir) -> SharedSite {
        let write = |rel: &str, content: &str| {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        };
        write(
            "content/pages/terms-of-service.md",
            "---\ntitle: Terms\ndescription: Rules\n---\n## Payment\nDue on completion.\n",
        );
        write(
            "content/blog/deck-care/index.md",
            "---\ntitle: Deck Care\ndescription: Seal it\ndate: \"2024-05-01\"\n---\n## Steps\n- Wash\n- Seal\n",
        );
        write("public/robots.txt", "User-agent: *");
        Arc::new(Site::new(dir.path()).unwrap())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_article_routes() {
        let dir = TempDir::new().unwrap();
        let app = router(site(&dir));

        let (status, body) = get(app.clone(), "/blog/deck-care").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<li>Wash</li><li>Seal</li>"));

        let (status, _) = get(app.clone(), "/blog/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = get(app, "/api/blog").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json[0]["slug"], "deck-care");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_content_requests() {
        let dir = TempDir::new().unwrap();
        let app = router(site(&dir));

        let (article, legal, blog) = tokio::join!(
            get(app.clone(), "/blog/deck-care"),
            get(app.clone(), "/legal/terms-of-service"),
            get(app, "/api/blog"),
        );
        assert_eq!(article.0, StatusCode::OK);
        assert_eq!(legal.0, StatusCode::OK);
        assert_eq!(blog.0, StatusCode::OK);
        assert!(blog.1.contains("Deck Care"));
    }

    #[tokio::test]
    async fn test_legal_route() {
        let dir = TempDir::new().unwrap();
        let app = router(site(&dir));

        let (status, body) = get(app.clone(), "/legal/terms-of-service").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2>Payment</h2><p>Due on completion.</p>"));

        let (status, _) = get(app, "/legal/home").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_page_data_and_static_routes() {
        let dir = TempDir::new().unwrap();
        let app = router(site(&dir));

        let (status, body) = get(app.clone(), "/api/pages/marine-rv").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["frontMatter"]["title"], "Error loading marine-rv");
        assert_eq!(json["testimonials"].as_array().unwrap().len(), 5);

        let (status, body) = get(app.clone(), "/api/portfolio/home-repairs").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Kitchen Cabinet Repair"));

        let (status, _) = get(app.clone(), "/api/testimonials/boats").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = get(app, "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "User-agent: *");
    }
}
