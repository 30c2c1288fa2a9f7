use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::expiration::{ExpirationStatus, days_remaining, describe};
use crate::domain::product::Product;

/// Wire representation of a [`Product`] in the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub date_expiration: DateTime<Utc>,
    pub days_expiration: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            price: value.price.get(),
            date_expiration: value.date_expiration.and_utc(),
            days_expiration: value.days_expiration,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

/// A product prepared for the HTML listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub date_expiration: String,
    pub days: i64,
    pub status: &'static str,
    pub message: String,
}

impl ProductView {
    /// Computes the remaining days at `now` without touching the stored cache.
    pub fn at(product: &Product, now: DateTime<Utc>) -> Self {
        let days = days_remaining(now, product.date_expiration.and_utc());
        Self::with_days(product, days)
    }

    /// Uses an already computed day count.
    pub fn with_days(product: &Product, days: i64) -> Self {
        Self {
            id: product.id.get(),
            name: product.name.as_str().to_string(),
            price: format!("{:.2}", product.price.get()),
            date_expiration: product
                .date_expiration
                .get()
                .format("%d %B %Y")
                .to_string(),
            days,
            status: ExpirationStatus::classify(days).as_str(),
            message: describe(days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ExpirationDate, ProductId, ProductName, ProductPrice};
    use chrono::TimeZone;
    use serde_json::Value;

    fn sample_product() -> Product {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap().naive_utc();
        Product {
            id: ProductId::new(7).unwrap(),
            name: ProductName::new("Milk").unwrap(),
            price: ProductPrice::new(2.5).unwrap(),
            date_expiration: ExpirationDate::parse("2025-03-15T00:00:00Z").unwrap(),
            days_expiration: Some(5),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn serializes_with_legacy_field_names() {
        let value: Value = serde_json::to_value(ProductDto::from(sample_product())).unwrap();
        assert_eq!(value["_id"], 7);
        assert_eq!(value["name"], "Milk");
        assert_eq!(value["price"], 2.5);
        assert_eq!(value["dateExpiration"], "2025-03-15T00:00:00Z");
        assert_eq!(value["daysExpiration"], 5);
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn view_classifies_at_render_time() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
        let view = ProductView::at(&sample_product(), now);
        assert_eq!(view.days, 5);
        assert_eq!(view.status, "danger");
        assert_eq!(view.message, "5 days remaining");
        assert_eq!(view.price, "2.50");
        assert_eq!(view.date_expiration, "15 March 2025");
    }
}
