//! HTTP server implementation for delivering the calculator page.
//! Uses axum framework with tower middleware support.

use axum::{
    Router,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::get,
};
use eyre::{Context, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{debug, info};

use super::page;

/// Web server that serves the calculator page to every client.
pub struct CalcServer {
    /// The address to bind the server to
    bind_addr: SocketAddr,
}

impl CalcServer {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Build the application router with all routes
    pub(crate) fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(serve_page))
            .route("/index.html", get(serve_page))
            .fallback(not_found)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::default().include_headers(true)),
            )
    }

    /// Bind the configured address. A port that is already taken surfaces
    /// here, before anything is served.
    pub async fn bind(&self) -> Result<TcpListener> {
        let listener = TcpListener::bind(self.bind_addr)
            .await
            .with_context(|| format!("Failed to bind to {}", self.bind_addr))?;
        info!("Listening on {}", self.bind_addr);
        Ok(listener)
    }

    /// Serve connections on `listener` until Ctrl+C, then shut down
    /// gracefully, releasing the port.
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        let router = self.build_router();

        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to listen for ctrl+c");
                info!("Shutting down web server...");
            })
            .await
            .context("Server error")?;

        Ok(())
    }
}

/// Serves the embedded calculator page.
async fn serve_page() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

/// Fallback handler for unrecognized paths.
async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!("No route for {}", uri.path());
    (StatusCode::NOT_FOUND, "File not found")
}
