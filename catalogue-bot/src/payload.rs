//! Decoding of the data the catalogue mini-app sends back.
//!
//! Expected shape: `{"action": "order_product", "product": {"id": "42", "nom": "Saumon", ...}}`.
//! The mini-app sends the whole product object; fields other than `id` and `nom` are ignored.

use serde_json::{Map, Value};
use thiserror::Error;

/// The only action that carries a product.
pub const ORDER_PRODUCT_ACTION: &str = "order_product";
pub const DEFAULT_PRODUCT_NAME: &str = "Produit inconnu";
pub const DEFAULT_PRODUCT_ID: &str = "N/A";

/// Product fields, defaults already filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    pub id: String,
    pub name: String,
}

/// What the user asked for through the mini-app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderIntent {
    OrderProduct(ProductRef),
    /// Any other (or missing) action: accepted and acknowledged generically.
    Acknowledge { action: Option<String> },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload is not valid JSON ({reason}): {raw}")]
    Malformed { raw: String, reason: String },

    #[error("payload is not a JSON object: {raw}")]
    UnexpectedShape { raw: String },
}

/// Parses raw mini-app data into an [`OrderIntent`].
///
/// Syntax errors give [`DecodeError::Malformed`]; valid JSON that is not an object gives
/// [`DecodeError::UnexpectedShape`]. A missing or malformed `product` never fails: its fields
/// fall back to [`DEFAULT_PRODUCT_ID`] and [`DEFAULT_PRODUCT_NAME`].
pub fn decode(raw: &str) -> Result<OrderIntent, DecodeError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| DecodeError::Malformed {
        raw: raw.to_string(),
        reason: e.to_string(),
    })?;
    let Value::Object(document) = value else {
        return Err(DecodeError::UnexpectedShape {
            raw: raw.to_string(),
        });
    };

    match document.get("action").and_then(Value::as_str) {
        Some(ORDER_PRODUCT_ACTION) => Ok(OrderIntent::OrderProduct(product_ref(
            document.get("product").and_then(Value::as_object),
        ))),
        other => Ok(OrderIntent::Acknowledge {
            action: other.map(str::to_string),
        }),
    }
}

fn product_ref(product: Option<&Map<String, Value>>) -> ProductRef {
    let field = |key: &str| product.and_then(|p| scalar_text(p.get(key)));
    ProductRef {
        id: field("id").unwrap_or_else(|| DEFAULT_PRODUCT_ID.to_string()),
        name: field("nom").unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
    }
}

/// Strings as-is, numbers and booleans as their JSON text; anything else counts as absent.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
