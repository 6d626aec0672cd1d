//! Products API
//!
//! `ProductApi` is the seam between the frontend and the network. The
//! frontend only talks to `dyn ProductApi`, so it can run against an
//! in-memory implementation in tests.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use shared::{Product, ProductPayload};

use crate::{ClientResult, HttpClient};

/// Collection endpoint; the trailing slash is part of the route
const PRODUCTS_PATH: &str = "productos/";

fn item_path(id: i64) -> String {
    format!("productos/{id}")
}

/// Operations on the `/productos/` resource
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// `GET /productos/`, in server order
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    /// `GET /productos/{id}`
    async fn get_product(&self, id: i64) -> ClientResult<Product>;

    /// `POST /productos/`; any 2xx is success
    async fn create_product(&self, payload: &ProductPayload) -> ClientResult<()>;

    /// `PUT /productos/{id}`; any 2xx is success
    async fn update_product(&self, id: i64, payload: &ProductPayload) -> ClientResult<()>;

    /// `DELETE /productos/{id}`; only 204 is success
    async fn delete_product(&self, id: i64) -> ClientResult<()>;
}

#[async_trait]
impl ProductApi for HttpClient {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get(PRODUCTS_PATH).await
    }

    async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.get(&item_path(id)).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> ClientResult<()> {
        self.send_json(Method::POST, PRODUCTS_PATH, payload).await?;
        Ok(())
    }

    async fn update_product(&self, id: i64, payload: &ProductPayload) -> ClientResult<()> {
        self.send_json(Method::PUT, &item_path(id), payload).await?;
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> ClientResult<()> {
        self.delete(&item_path(id), StatusCode::NO_CONTENT).await
    }
}
