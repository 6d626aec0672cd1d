//! Application core: state container, form, actions, errors
//!
//! Nothing in here draws; the `ui` module renders from these types.

pub mod action;
pub mod error;
pub mod form;
pub mod store;

#[cfg(test)]
pub(crate) mod fake;

pub use action::{Action, Effect};
pub use error::{AppError, FormError};
pub use form::{FormField, FormMode, ProductForm};
pub use store::{Store, ViewMode};
