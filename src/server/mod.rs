//! The static content server for the calculator page.
//!
//! This module provides an axum-based HTTP server that serves the embedded
//! calculator page for `/` and `/index.html` and answers 404 for any other
//! path. The payload never varies, so every client gets the same bytes and
//! the server is never contacted again after the page loads.

pub mod page;
mod http;

pub use http::CalcServer;
