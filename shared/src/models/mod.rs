//! Data models
//!
//! Mirrors of the server-owned entities. Field names on the wire are the
//! API's (Spanish) names; Rust code uses the English ones.

pub mod product;

// Re-exports
pub use product::*;
