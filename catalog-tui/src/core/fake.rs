//! In-memory `ProductApi` for tests

use std::sync::Mutex;

use async_trait::async_trait;
use catalog_client::{ClientError, ClientResult, ProductApi, StatusCode};
use crossterm::event::KeyCode;
use shared::{Product, ProductPayload};

#[derive(Default)]
struct FakeState {
    products: Vec<Product>,
    next_id: i64,
    fail_with: Option<u16>,
    calls: Vec<String>,
}

/// Behaves like the products API, recording every call
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            state: Mutex::new(FakeState {
                products,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Make every following request fail with this status
    pub fn fail_with(&self, status: u16) {
        self.state.lock().unwrap().fail_with = Some(status);
    }

    /// Calls made so far, e.g. `["GET", "POST"]`
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }

    fn record(&self, call: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call.to_string());
        match state.fail_with {
            Some(code) => Err(ClientError::Status {
                status: StatusCode::from_u16(code).unwrap(),
                body: "rejected".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductApi for FakeApi {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.record("GET")?;
        Ok(self.products())
    }

    async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.record("GET_ONE")?;
        self.products()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    async fn create_product(&self, payload: &ProductPayload) -> ClientResult<()> {
        self.record("POST")?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.products.push(Product {
            id,
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: payload.price,
        });
        Ok(())
    }

    async fn update_product(&self, id: i64, payload: &ProductPayload) -> ClientResult<()> {
        self.record("PUT")?;
        let mut state = self.state.lock().unwrap();
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
        product.name = payload.name.clone();
        product.description = payload.description.clone();
        product.price = payload.price;
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> ClientResult<()> {
        self.record("DELETE")?;
        self.state.lock().unwrap().products.retain(|p| p.id != id);
        Ok(())
    }
}

pub fn product(id: i64, name: &str, description: Option<&str>, price: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
        price: price.parse().unwrap(),
    }
}

pub fn key(code: KeyCode) -> crossterm::event::KeyEvent {
    crossterm::event::KeyEvent::new(code, crossterm::event::KeyModifiers::NONE)
}
