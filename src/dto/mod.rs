//! Request/response shapes exposed by the API endpoints.

use serde::Serialize;

pub mod client;
pub mod order;
pub mod restaurant;

/// Body returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct RemovalResponse {
    pub message: String,
}

impl RemovalResponse {
    pub fn new(entity: &str, id: i32) -> Self {
        Self {
            message: format!("{entity} with ID {id} has been removed"),
        }
    }
}
