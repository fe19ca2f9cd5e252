// HTML form binding for products
//
// Browsers post every field as text. Binding parses the raw values and runs
// the entity rules, so a failed bind can re-render the form exactly as the
// user typed it.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::core::ModelState;

/// Raw product form fields as posted by the browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    /// Hidden key field on the edit form
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub price: String,

    #[serde(default)]
    pub stock: String,

    #[serde(default)]
    pub color: String,
}

impl ProductForm {
    /// Pre-fill a form from a stored product
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.to_string()),
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            color: product.color.clone().unwrap_or_default(),
        }
    }

    /// Key carried by the hidden id field, if it holds a number
    pub fn posted_id(&self) -> Option<i32> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok())
    }

    /// Parse and validate the form into a product with id 0.
    ///
    /// On failure the returned state holds one entry per broken field.
    pub fn bind(&self) -> Result<Product, ModelState> {
        let mut state = ModelState::new();

        let price = match self.price.trim() {
            "" => {
                state.add_error("price", "Price is required");
                Decimal::ZERO
            }
            raw => Decimal::from_str(raw).unwrap_or_else(|_| {
                state.add_error("price", format!("'{}' is not a valid price", raw));
                Decimal::ZERO
            }),
        };

        let stock = match self.stock.trim() {
            "" => {
                state.add_error("stock", "Stock is required");
                0
            }
            raw => raw.parse::<i32>().unwrap_or_else(|_| {
                state.add_error("stock", format!("'{}' is not a valid stock count", raw));
                0
            }),
        };

        let color = match self.color.trim() {
            "" => None,
            _ => Some(self.color.clone()),
        };

        let product = Product::new(self.name.clone(), price, stock, color);

        // Parse failures already explain the field; skip rule errors for it
        let parsed_fields: Vec<String> = state.errors().iter().map(|e| e.field.clone()).collect();
        for error in product.validate().errors() {
            if !parsed_fields.contains(&error.field) {
                state.add_error(error.field.clone(), error.message.clone());
            }
        }

        if state.is_valid() {
            Ok(product)
        } else {
            Err(state)
        }
    }
}
