//! Shared response envelope types for API handlers.
//!
//! All CRUD responses use a `{ "data": ... }` envelope. The export endpoint
//! (raw file payload) and the billing webhook (provider-mandated
//! `{ "received": true }` body) are the two exceptions.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
