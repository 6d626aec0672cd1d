//! Actions and the effects that produce them
//!
//! Each effect performs one request and returns the `Action` describing
//! its outcome. The UI loop runs effects on spawned tasks and applies the
//! resulting actions to the store in arrival order.

use catalog_client::{ClientResult, ProductApi};
use shared::{Product, ProductPayload};

use super::form::FormMode;

/// Outcome of a finished request
#[derive(Debug)]
pub enum Action {
    /// `GET /productos/` finished
    ProductsLoaded(ClientResult<Vec<Product>>),
    /// Create or update finished
    Submitted {
        mode: FormMode,
        result: ClientResult<()>,
    },
    /// Delete finished
    Deleted { id: i64, result: ClientResult<()> },
}

/// Follow-up work requested by the store after applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Invalidate and refetch the whole list
    Reload,
}

/// Fetch the full product list
pub async fn load_products(api: &dyn ProductApi) -> Action {
    tracing::debug!("Loading products");
    Action::ProductsLoaded(api.list_products().await)
}

/// Create or update, depending on `mode`
pub async fn submit_product(api: &dyn ProductApi, mode: FormMode, payload: ProductPayload) -> Action {
    let result = match mode {
        FormMode::Create => {
            tracing::debug!(name = %payload.name, "Creating product");
            api.create_product(&payload).await
        }
        FormMode::Edit(id) => {
            tracing::debug!(id, name = %payload.name, "Updating product");
            api.update_product(id, &payload).await
        }
    };
    Action::Submitted { mode, result }
}

/// Delete unconditionally
pub async fn delete_product(api: &dyn ProductApi, id: i64) -> Action {
    tracing::debug!(id, "Deleting product");
    Action::Deleted {
        id,
        result: api.delete_product(id).await,
    }
}
