//! Error conversion glue between the domain, repository and service layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the conversions live here instead.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

#[cfg(feature = "server")]
use crate::forms::products::AddProductFormError;
#[cfg(feature = "server")]
use crate::services::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<AddProductFormError> for ServiceError {
    fn from(val: AddProductFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ValidationError(message) => ServiceError::Validation(message),
            RepositoryError::StoreUnavailable(message) => ServiceError::StoreUnavailable(message),
            RepositoryError::Database(e) => ServiceError::Internal(e.to_string()),
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_keep_their_kind() {
        assert_eq!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        );
        assert_eq!(
            ServiceError::from(RepositoryError::StoreUnavailable("down".into())),
            ServiceError::StoreUnavailable("down".into())
        );
        assert_eq!(
            ServiceError::from(RepositoryError::ValidationError("bad".into())),
            ServiceError::Validation("bad".into())
        );
    }

    #[test]
    fn type_constraints_become_validation_errors() {
        let err: ServiceError = TypeConstraintError::NegativeNumber("price").into();
        assert_eq!(
            err,
            ServiceError::Validation("price must be zero or greater".into())
        );
    }
}
