use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ExpirationDate, ProductId, ProductName, ProductPrice};

/// A stocked product with a fixed expiration date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub date_expiration: ExpirationDate,
    /// Days remaining as of the last lookup that touched this record.
    ///
    /// This is a cached value, not a live one: it is overwritten on every
    /// lookup and drifts as calendar days pass without one.
    pub days_expiration: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub date_expiration: ExpirationDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// How a lookup request identifies the product it wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSelector {
    /// Exact identifier match.
    Id(ProductId),
    /// Case-insensitive substring match on the product name.
    Name(String),
}

/// Whether `name` contains `lowercase_fragment`, ignoring case.
///
/// The fragment must already be lowercased so callers scanning many names
/// fold it once.
pub fn name_contains(name: &str, lowercase_fragment: &str) -> bool {
    name.to_lowercase().contains(lowercase_fragment)
}
