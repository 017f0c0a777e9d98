//! The embedded calculator page.
//!
//! The page is a static asset compiled into the binary and served verbatim.
//! It never varies per request, so there is no templating; the calculator
//! logic inside its `<script>` block mirrors [`crate::calculator`].

/// Full HTML/CSS/JavaScript for the calculator page.
pub const INDEX_HTML: &str = include_str!("../../web/index.html");
