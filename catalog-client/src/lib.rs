//! Catalog Client - HTTP client for the products API
//!
//! Provides network-based HTTP calls to the `/productos/` REST endpoints.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::ProductApi;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use reqwest::StatusCode;

// Re-export shared types for convenience
pub use shared::{Product, ProductPayload};
