//! Domain types for the inventory API.
//!
//! # Design
//! The backend owns the product schema. The client only relies on the `id`
//! field; everything else is carried through as an ordered JSON map so new
//! backend columns show up without a client release.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arbitrary product attributes sent on create and update.
pub type ProductData = Map<String, Value>;

/// Backend identifier of a product. Numeric and string ids are both accepted.
///
/// Two ids are the same when they address the same `{base}/{id}` path, so
/// `Text("12")` equals `Number(12)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for ProductId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ProductId::Number(a), ProductId::Number(b)) => a == b,
            (ProductId::Text(a), ProductId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for ProductId {}

impl Hash for ProductId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n.into())
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::convert::Infallible;

    /// Integers become `Number`, anything else stays `Text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(ProductId::from)
            .unwrap_or_else(|_| ProductId::Text(s.to_string())))
    }
}

/// A single product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    /// The product's attributes including `id`, suitable as form initial data.
    pub fn to_data(&self) -> ProductData {
        let mut data = Map::with_capacity(self.fields.len() + 1);
        data.insert(
            "id".to_string(),
            serde_json::to_value(&self.id).unwrap_or(Value::Null),
        );
        data.extend(self.fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        data
    }
}

/// Which product, if any, the form is currently configured to update.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(Product),
}

impl EditSession {
    pub fn product(&self) -> Option<&Product> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(product) => Some(product),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }
}

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq)]
pub enum Deleted {
    /// The server answered 204 and sent no body.
    NoContent,
    /// The server answered with some other 2xx and this body.
    Returned(Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_keeps_extra_fields() {
        let product: Product =
            serde_json::from_value(json!({"id": 1, "name": "Shirt", "qty": 5})).unwrap();
        assert_eq!(product.id, ProductId::from(1));
        assert_eq!(product.fields["name"], "Shirt");
        assert_eq!(product.fields["qty"], 5);
        assert!(!product.fields.contains_key("id"));
    }

    #[test]
    fn product_accepts_string_id() {
        let product: Product =
            serde_json::from_value(json!({"id": "64f0c", "name": "Hat"})).unwrap();
        assert_eq!(product.id, ProductId::Text("64f0c".to_string()));
        assert_eq!(product.id.to_string(), "64f0c");
    }

    #[test]
    fn product_requires_id() {
        let result: Result<Product, _> = serde_json::from_value(json!({"name": "Hat"}));
        assert!(result.is_err());
    }

    #[test]
    fn product_serializes_flat() {
        let product: Product =
            serde_json::from_value(json!({"id": 2, "name": "Hat"})).unwrap();
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"id": 2, "name": "Hat"})
        );
    }

    #[test]
    fn to_data_puts_id_first() {
        let product: Product =
            serde_json::from_value(json!({"name": "Hat", "id": 2})).unwrap();
        let data = product.to_data();
        assert_eq!(data.keys().next().map(String::as_str), Some("id"));
        assert_eq!(data["name"], "Hat");
    }

    #[test]
    fn numeric_ids_outside_i64_are_kept() {
        let products: Vec<Product> = serde_json::from_value(json!([
            {"id": 1.5, "name": "Shirt"},
            {"id": 18446744073709551615u64, "name": "Hat"}
        ]))
        .unwrap();
        assert_eq!(products[0].id.to_string(), "1.5");
        assert_eq!(products[1].id.to_string(), "18446744073709551615");
    }

    #[test]
    fn ids_with_the_same_path_are_equal() {
        use std::collections::HashSet;

        let text = ProductId::Text("12".to_string());
        let number = ProductId::from(12);
        assert_eq!(text, number);
        assert_ne!(text, ProductId::from(13));

        let set: HashSet<ProductId> = [text, number].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn product_id_from_str() {
        assert_eq!("5".parse::<ProductId>().unwrap(), ProductId::from(5));
        assert_eq!(
            "abc".parse::<ProductId>().unwrap(),
            ProductId::Text("abc".to_string())
        );
    }

    #[test]
    fn edit_session_defaults_to_idle() {
        let session = EditSession::default();
        assert!(!session.is_editing());
        assert!(session.product().is_none());
    }
}
