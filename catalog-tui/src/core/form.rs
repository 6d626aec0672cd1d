//! Create/edit product form
//!
//! Holds the three text fields while the user types. Whether a submit
//! creates or updates is decided by the store's editing target, not here.

use crossterm::event::Event;
use shared::{Product, ProductPayload, money};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use super::error::FormError;

/// What a submit will do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// POST a new product
    #[default]
    Create,
    /// PUT over the product with this id
    Edit(i64),
}

/// Form field, in tab order
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Price,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Name, Self::Description, Self::Price];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description (optional)",
            Self::Price => "Price",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Price,
            Self::Price => Self::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Name => Self::Price,
            Self::Description => Self::Name,
            Self::Price => Self::Description,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ProductForm {
    name: Input,
    description: Input,
    price: Input,
    focus: FormField,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self, field: FormField) -> &Input {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Price => &self.price,
        }
    }

    fn input_mut(&mut self, field: FormField) -> &mut Input {
        match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::Price => &mut self.price,
        }
    }

    /// Current text of a field
    pub fn value(&self, field: FormField) -> &str {
        self.input(field).value()
    }

    /// Replace the text of a field, cursor at the end
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        *self.input_mut(field) = Input::new(value.into());
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Populate every field from the product being edited
    pub fn load(&mut self, product: &Product) {
        self.set_value(FormField::Name, product.name.as_str());
        self.set_value(FormField::Description, product.description_text());
        self.set_value(FormField::Price, product.price.normalize().to_string());
        self.focus = FormField::Name;
    }

    /// Blank every field
    pub fn clear(&mut self) {
        self.name.reset();
        self.description.reset();
        self.price.reset();
        self.focus = FormField::Name;
    }

    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    /// Forward a terminal event to the focused field
    pub fn handle_event(&mut self, event: &Event) {
        let focus = self.focus;
        self.input_mut(focus).handle_event(event);
    }

    /// Build the request body from the current text
    ///
    /// Name must contain something other than whitespace, price must parse
    /// as a non-negative decimal, a blank description is sent as `null`.
    pub fn payload(&self) -> Result<ProductPayload, FormError> {
        let name = self.value(FormField::Name);
        if name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        let price = money::parse_price(self.value(FormField::Price))?;
        let description = self.value(FormField::Description).to_string();

        Ok(ProductPayload::new(name, Some(description), price))
    }
}
