use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::NewProduct;
use crate::domain::types::{ExpirationDate, ProductName, ProductPrice, TypeConstraintError};

/// JSON body accepted when creating a product.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub date_expiration: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddProductFormPayload {
    pub name: ProductName,
    pub price: ProductPrice,
    pub date_expiration: ExpirationDate,
}

impl AddProductFormPayload {
    pub fn into_new_product(self, now: NaiveDateTime) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            date_expiration: self.date_expiration,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddProductFormError {
    #[error("Add product form validation failed: {0}")]
    Validation(String),
    #[error("Add product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddProductForm> for AddProductFormPayload {
    type Error = AddProductFormError;

    fn try_from(value: AddProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: ProductName::new(value.name)?,
            price: ProductPrice::new(value.price)?,
            date_expiration: ExpirationDate::parse(&value.date_expiration)?,
        })
    }
}
