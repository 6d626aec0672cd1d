//! Catalog TUI - terminal frontend for the products API
//!
//! A customer-facing catalog and an administration screen with a
//! create/edit form, both backed by `catalog_client::ProductApi`.

pub mod app;
pub mod core;
pub mod logger;
pub mod ui;

pub use app::App;
