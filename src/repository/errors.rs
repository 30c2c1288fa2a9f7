use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed record does not exist.
    #[error("not found")]
    NotFound,
    /// Stored or supplied data violates a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// No connection to the underlying store could be obtained.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<PoolError> for RepositoryError {
    fn from(value: PoolError) -> Self {
        RepositoryError::StoreUnavailable(value.to_string())
    }
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            other => RepositoryError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let err: RepositoryError = diesel::result::Error::NotFound.into();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn other_diesel_errors_keep_their_detail() {
        let err: RepositoryError = diesel::result::Error::RollbackTransaction.into();
        assert!(matches!(err, RepositoryError::Database(_)));
        assert!(err.to_string().starts_with("database error"));
    }
}
