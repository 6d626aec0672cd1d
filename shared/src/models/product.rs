//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

/// Product entity, as returned by `GET /productos/`
///
/// `id` is assigned by the server and never created client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    /// Travels as a JSON number
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Product {
    /// Price as shown to users, e.g. `$2.50`
    pub fn display_price(&self) -> String {
        money::format_price(self.price)
    }

    /// Description for text fields: blank when absent
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Create/update product payload
///
/// Same body for `POST /productos/` and `PUT /productos/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    /// Serialized as `null` when absent
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, description: Option<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.filter(|d| !d.is_empty()),
            price,
        }
    }
}

impl From<&Product> for ProductPayload {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        }
    }
}
