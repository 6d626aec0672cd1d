//! Shared types for the product catalog
//!
//! Wire model of the `/productos/` API and the money helpers used by
//! both the HTTP client and the terminal frontend.

pub mod models;
pub mod money;

// Re-exports
pub use models::{Product, ProductPayload};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
