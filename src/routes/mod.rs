//! HTTP handlers. Each one verifies the bearer token through the
//! [`AuthenticatedUser`](crate::models::auth::AuthenticatedUser) extractor
//! and delegates to the service layer; errors map to statuses here.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;

use crate::services::ServiceError;

pub mod client;
pub mod order;
pub mod restaurant;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ValidationFailed(_)
            | ServiceError::CapacityExceeded
            | ServiceError::DuplicateMembership
            | ServiceError::IneligibleAge
            | ServiceError::ReferenceNotFound
            | ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::QueryFailed(_) | ServiceError::PersistenceFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{self}");
        }

        let body = match self {
            ServiceError::ValidationFailed(errors) => json!({
                "statusCode": status.as_u16(),
                "message": "Validation failed",
                "errors": errors,
            }),
            other => json!({
                "statusCode": status.as_u16(),
                "message": other.to_string(),
            }),
        };

        HttpResponse::build(status).json(body)
    }
}
