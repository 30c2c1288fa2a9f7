use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{ExpirationDate, ProductName, ProductPrice, TypeConstraintError};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub date_expiration: NaiveDateTime,
    pub days_expiration: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub date_expiration: NaiveDateTime,
    pub days_expiration: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Fields rewritten when an existing product is saved.
///
/// `date_expiration` is immutable after creation and intentionally absent.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductChangeset {
    pub name: String,
    pub price: f64,
    pub days_expiration: Option<i64>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            price: ProductPrice::new(product.price)?,
            date_expiration: ExpirationDate::from_naive(product.date_expiration),
            days_expiration: product.days_expiration,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            price: product.price.get(),
            date_expiration: product.date_expiration.get(),
            days_expiration: None,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<&DomainProduct> for ProductChangeset {
    fn from(product: &DomainProduct) -> Self {
        Self {
            name: product.name.as_str().to_string(),
            price: product.price.get(),
            days_expiration: product.days_expiration,
            updated_at: product.updated_at,
        }
    }
}
