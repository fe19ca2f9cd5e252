// Product entity mapped to the `Product` table
//
// Column limits mirror the schema in migrations/:
// Name VARCHAR(200), Color VARCHAR(50), Price DECIMAL(18,2)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::traits::Entity;
use crate::core::ModelState;

/// Maximum characters in `name`
pub const NAME_MAX_LENGTH: usize = 200;

/// Maximum characters in `color`
pub const COLOR_MAX_LENGTH: usize = 50;

/// Fractional digits kept by the DECIMAL(18,2) column
pub const PRICE_SCALE: u32 = 2;

/// Integer digits left in DECIMAL(18,2) after the scale
pub const PRICE_MAX_INTEGER_DIGITS: u32 = 16;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct Product {
    /// Store-assigned primary key; 0 before the row is created
    #[serde(default)]
    pub id: i32,

    pub name: String,

    pub price: Decimal,

    pub stock: i32,

    #[serde(default)]
    pub color: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal, stock: i32, color: Option<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            stock,
            color,
        }
    }

    /// Color for display, empty when unset
    pub fn color_label(&self) -> &str {
        self.color.as_deref().unwrap_or("")
    }

    /// Check the column rules, collecting every violation
    pub fn validate(&self) -> ModelState {
        let mut state = ModelState::new();

        if self.name.trim().is_empty() {
            state.add_error("name", "Name is required");
        } else if self.name.chars().count() > NAME_MAX_LENGTH {
            state.add_error(
                "name",
                format!("Name cannot be longer than {} characters", NAME_MAX_LENGTH),
            );
        }

        if let Some(message) = price_error(self.price) {
            state.add_error("price", message);
        }

        if let Some(color) = &self.color {
            if color.chars().count() > COLOR_MAX_LENGTH {
                state.add_error(
                    "color",
                    format!("Color cannot be longer than {} characters", COLOR_MAX_LENGTH),
                );
            }
        }

        state
    }
}

impl Entity for Product {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

fn price_error(price: Decimal) -> Option<String> {
    // Trailing zeros do not count against the scale ("100.500" fits)
    if price.normalize().scale() > PRICE_SCALE {
        return Some(format!(
            "Price cannot have more than {} decimal places",
            PRICE_SCALE
        ));
    }

    let limit = Decimal::from(10_i64.pow(PRICE_MAX_INTEGER_DIGITS));
    if price.abs().trunc() >= limit {
        return Some(format!(
            "Price cannot have more than {} integer digits",
            PRICE_MAX_INTEGER_DIGITS
        ));
    }

    None
}
