//! Application error types
//!
//! Every variant ends up in the log panel and nowhere else.

use catalog_client::ClientError;
use shared::Decimal;
use shared::money::PriceError;
use thiserror::Error;

/// Form content that cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name is required")]
    MissingName,

    #[error("price is required")]
    MissingPrice,

    #[error("price is not a number: {0:?}")]
    InvalidPrice(String),

    #[error("price must be non-negative, got {0}")]
    NegativePrice(Decimal),
}

impl From<PriceError> for FormError {
    fn from(err: PriceError) -> Self {
        match err {
            PriceError::Empty => Self::MissingPrice,
            PriceError::NotANumber(text) => Self::InvalidPrice(text),
            PriceError::Negative(value) => Self::NegativePrice(value),
        }
    }
}

/// Failure of a user-triggered operation
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load products: {0}")]
    Fetch(#[source] ClientError),

    #[error("Failed to create product: {0}")]
    Create(#[source] ClientError),

    #[error("Failed to update product {id}: {source}")]
    Update {
        id: i64,
        #[source]
        source: ClientError,
    },

    #[error("Failed to delete product {id}: {source}")]
    Delete {
        id: i64,
        #[source]
        source: ClientError,
    },

    #[error("Invalid form: {0}")]
    InvalidForm(#[from] FormError),
}

impl AppError {
    /// Log the error; nothing else is done with it
    pub fn log(&self) {
        match self {
            Self::InvalidForm(_) => tracing::warn!("{}", self),
            _ => tracing::error!("{}", self),
        }
    }
}
