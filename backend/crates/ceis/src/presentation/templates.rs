//! Embedded page templates

/// Single-page lookup UI served at `GET /`
pub const INDEX_HTML: &str = include_str!("index.html");
