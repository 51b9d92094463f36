//! API route handlers
//!
//! - `contacts`: list, add, delete, update, and the two lookups
//! - `health`: liveness probe

pub mod contacts;
pub mod health;

use crate::error::ServerError;

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::RouteNotFound
}
