//! Business operations over the repository traits.
//!
//! Every failure is scoped to the single operation and surfaces as a
//! [`ServiceError`]; storage faults never leak raw. The HTTP layer maps
//! each kind to a status code.

use thiserror::Error;

use crate::forms::FieldError;
use crate::repository::errors::RepositoryError;

pub mod client;
pub mod order;
pub mod restaurant;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The payload violated field rules; carries the full ordered list,
    /// not just the first failure.
    #[error("Validation failed")]
    ValidationFailed(Vec<FieldError>),

    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Maximum capacity reached")]
    CapacityExceeded,

    #[error("This client is already registered in the restaurant")]
    DuplicateMembership,

    #[error("Only adults are allowed")]
    IneligibleAge,

    /// Order creation could not resolve its references. The source never
    /// said which one was missing and existing clients expect the
    /// combined message.
    #[error("Client or Restaurant not found")]
    ReferenceNotFound,

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Could not run query: {0}")]
    QueryFailed(String),

    #[error("Could not persist changes: {0}")]
    PersistenceFailure(String),

    #[error("Unauthorized")]
    Unauthorized,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Wraps a storage fault raised while reading.
    pub(crate) fn query(err: RepositoryError) -> Self {
        ServiceError::QueryFailed(err.to_string())
    }

    /// Wraps a storage fault raised while writing. The write is not
    /// considered applied.
    pub(crate) fn persistence(err: RepositoryError) -> Self {
        ServiceError::PersistenceFailure(err.to_string())
    }
}

/// Rejects out-of-range pagination before any query is built.
pub(crate) fn check_pagination(page: usize, limit: usize) -> ServiceResult<()> {
    if page < 1 {
        return Err(ServiceError::InvalidArgument(
            "Page must be greater than or equal to 1".to_string(),
        ));
    }
    if limit < 1 {
        return Err(ServiceError::InvalidArgument(
            "Limit must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_bounds() {
        assert!(check_pagination(1, 10).is_ok());
        assert!(matches!(
            check_pagination(0, 10),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            check_pagination(1, 0),
            Err(ServiceError::InvalidArgument(_))
        ));
    }
}
