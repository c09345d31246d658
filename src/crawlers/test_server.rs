//! Stub site used by the fetcher and driver tests.
//!
//! Routes:
//! - `/page` serves a document with a relative og:image and a title
//! - `/bare` serves a document with no metadata
//! - `/missing` answers 404 with a small HTML body
//! - `/redirect` answers a permanent redirect to `/page`
//! - `/hop/:remaining` redirects `remaining` more times before `/page`
//! - `/echo` reflects the request's User-Agent and Accept as meta tags
//! - `/slow` waits far longer than any test timeout before answering

use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use std::time::Duration;
use tokio::net::TcpListener;

pub const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>
    Stub   Page
  </title>
  <meta content="/img/a.png" property="og:image">
  <meta name="twitter:image" content="https://cdn.example.com/t.png">
</head>
<body><p>stub</p></body>
</html>"#;

pub const BARE_HTML: &str = "<html><body><p>no metadata here</p></body></html>";

const MISSING_HTML: &str = "<html><head><title>Not Found</title></head></html>";

pub fn router() -> Router {
    Router::new()
        .route("/page", get(|| async { Html(PAGE_HTML) }))
        .route("/bare", get(|| async { Html(BARE_HTML) }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Html(MISSING_HTML)) }),
        )
        .route("/redirect", get(|| async { Redirect::permanent("/page") }))
        .route("/hop/:remaining", get(hop))
        .route("/echo", get(echo))
        .route("/slow", get(slow))
}

/// Starts the stub on an ephemeral port and returns its base URL
pub async fn spawn() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn hop(Path(remaining): Path<u32>) -> Redirect {
    if remaining == 0 {
        Redirect::temporary("/page")
    } else {
        Redirect::temporary(&format!("/hop/{}", remaining - 1))
    }
}

async fn echo(headers: HeaderMap) -> impl IntoResponse {
    let value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    Html(format!(
        r#"<meta name="ua" content="{}"><meta name="accept" content="{}">"#,
        value(header::USER_AGENT),
        value(header::ACCEPT),
    ))
}

async fn slow() -> Html<&'static str> {
    tokio::time::sleep(Duration::from_secs(30)).await;
    Html(BARE_HTML)
}
