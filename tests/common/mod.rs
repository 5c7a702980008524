//! Test helpers for filter function tests.
//!
//! Provides a local feed server serving the fixtures in `tests/fixtures` and a
//! `TestServer` wired to allow fetching from it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::header, http::StatusCode, routing::get, Router};
use axum_test::TestServer;
use tokio::net::TcpListener;

use rss_filter::config::FetchConfig;
use rss_filter::{create_router, AppState};

pub const TECH_FEED: &str = include_str!("../fixtures/tech.xml");
pub const NO_AUTHORS_FEED: &str = include_str!("../fixtures/no_authors.xml");
pub const BLOG_ATOM: &str = include_str!("../fixtures/blog.atom");

/// Local server hosting fixture feeds.
pub struct FeedServer {
    addr: SocketAddr,
}

impl FeedServer {
    /// Start serving fixtures on a random local port.
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/tech.xml", get(|| async { rss_body(TECH_FEED) }))
            .route("/no_authors.xml", get(|| async { rss_body(NO_AUTHORS_FEED) }))
            .route(
                "/blog.atom",
                get(|| async { ([(header::CONTENT_TYPE, "application/atom+xml")], BLOG_ATOM) }),
            )
            .route("/broken.xml", get(|| async { "this is not a feed" }))
            .route(
                "/gone.xml",
                get(|| async { (StatusCode::GONE, "feed removed") }),
            );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind feed server");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Feed server failed");
        });

        Self { addr }
    }

    /// URL of a fixture on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}/{}", self.addr, path.trim_start_matches('/'))
    }
}

fn rss_body(body: &'static str) -> ([(header::HeaderName, &'static str); 1], &'static str) {
    ([(header::CONTENT_TYPE, "application/rss+xml")], body)
}

/// Fetch configuration allowing loopback feed hosts.
pub fn local_fetch_config() -> FetchConfig {
    FetchConfig {
        allow_private_hosts: true,
        total_timeout_secs: 5,
        ..FetchConfig::default()
    }
}

/// Create a test server for the filter function.
pub fn create_test_server(fetch: &FetchConfig) -> TestServer {
    let state = Arc::new(AppState::new(fetch).expect("Failed to create app state"));
    TestServer::new(create_router(state, &[])).expect("Failed to create test server")
}
