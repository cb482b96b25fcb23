use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::RestCollection;

// ============================================================================
// Price
// ============================================================================

/// Цена в том виде, в каком её вернул сервер
///
/// The create form posts price as text, so a backend that stores values as
/// given returns either a number or a string. Both are shown as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(v) => write!(f, "{}", v),
            Price::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Товар, как его отдаёт `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the server; never sent on create.
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub price: Option<Price>,
}

impl RestCollection for Product {
    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Черновик нового товара, отправляется как есть в `POST /products`
///
/// `price` holds the raw input text and stays `null` until the field is
/// edited. The server is the only validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Option<String>,
}
