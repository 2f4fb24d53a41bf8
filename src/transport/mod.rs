//! HTTP transport for the Swaply backend
//!
//! A single dispatch layer replaces the per-resource request wrappers: URL
//! resolution against one configured base URL, bearer-token header injection
//! from the injected [`crate::session::TokenStore`], JSON and multipart body
//! handling, and one status-to-error mapping.

pub mod http_client;

pub use http_client::{SwaplyHttpClient, SwaplyHttpClientImpl};
