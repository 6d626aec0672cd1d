//! Application state container
//!
//! Owns the product list, the active view and the editing target. Views
//! borrow it read-only; only the UI loop mutates it, through `apply` and
//! the edit transitions below.

use shared::Product;

use super::action::{Action, Effect};
use super::error::AppError;
use super::form::{FormMode, ProductForm};

/// Which screen is shown
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Read-only customer view
    #[default]
    Catalog,
    /// Table plus create/edit form
    Admin,
}

impl ViewMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Catalog => "Catalog",
            Self::Admin => "Admin",
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
    view_mode: ViewMode,
    editing: Option<Product>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Product loaded into the form, `None` in create mode
    pub fn editing(&self) -> Option<&Product> {
        self.editing.as_ref()
    }

    pub fn form_mode(&self) -> FormMode {
        match &self.editing {
            Some(product) => FormMode::Edit(product.id),
            None => FormMode::Create,
        }
    }

    /// Switch screens; the list is not refetched
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Catalog => ViewMode::Admin,
            ViewMode::Admin => ViewMode::Catalog,
        };
    }

    /// Replace the whole list, keeping server order
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Load `product` into the form, replacing any previous target
    pub fn begin_edit(&mut self, product: Product, form: &mut ProductForm) {
        tracing::debug!(id = product.id, "Editing product");
        form.load(&product);
        self.editing = Some(product);
    }

    /// Leave edit mode and blank the form, without touching the network
    pub fn cancel_edit(&mut self, form: &mut ProductForm) {
        if self.editing.take().is_some() {
            tracing::debug!("Edit cancelled");
        }
        form.clear();
    }

    pub fn clear_editing(&mut self) {
        self.editing = None;
    }

    /// Apply the outcome of a request
    ///
    /// Failures are logged and leave both the store and the form as they
    /// were. Every successful mutation asks for a reload.
    pub fn apply(&mut self, action: Action, form: &mut ProductForm) -> Option<Effect> {
        match action {
            Action::ProductsLoaded(Ok(products)) => {
                tracing::info!("Loaded {} products", products.len());
                self.replace_products(products);
                None
            }
            Action::ProductsLoaded(Err(e)) => {
                AppError::Fetch(e).log();
                None
            }
            Action::Submitted { mode, result: Ok(()) } => {
                match mode {
                    FormMode::Create => tracing::info!("Product created"),
                    FormMode::Edit(id) => tracing::info!(id, "Product updated"),
                }
                self.clear_editing();
                form.clear();
                Some(Effect::Reload)
            }
            Action::Submitted { mode, result: Err(e) } => {
                match mode {
                    FormMode::Create => AppError::Create(e).log(),
                    FormMode::Edit(id) => AppError::Update { id, source: e }.log(),
                }
                None
            }
            Action::Deleted { id, result: Ok(()) } => {
                tracing::info!(id, "Product deleted");
                Some(Effect::Reload)
            }
            Action::Deleted { id, result: Err(e) } => {
                AppError::Delete { id, source: e }.log();
                None
            }
        }
    }
}
