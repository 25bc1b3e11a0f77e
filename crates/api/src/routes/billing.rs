//! Route definition for billing provider webhooks.
//!
//! No session auth here: callers authenticate via the signature header
//! over the raw body.

use axum::routing::post;
use axum::Router;

use crate::handlers::billing;
use crate::state::AppState;

/// Routes mounted at `/webhooks`.
pub fn router() -> Router<AppState> {
    Router::new().route("/billing", post(billing::billing_webhook))
}
