//! Billing webhook handler: the subscription reconciler.
//!
//! Consumes one signed event per request and applies at most one profile
//! mutation. Every mutation is a last-write-wins field assignment, so
//! replays under the provider's at-least-once delivery converge to the
//! same profile state. Once the signature verifies, the response is 200
//! even for no-ops -- a non-2xx would put the provider into a retry loop
//! over an event we will never be able to process.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::json;
use vault_core::billing::{
    self, BillingEvent, EVENT_CHECKOUT_COMPLETED, EVENT_SUBSCRIPTION_DELETED,
    EVENT_SUBSCRIPTION_UPDATED,
};
use vault_core::tier;
use vault_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Header the billing provider sends its signature in.
const SIGNATURE_HEADER: &str = "stripe-signature";

/// POST /api/v1/webhooks/billing
///
/// Responses: 200 `{"received": true}` on processed/no-op, 400 on a
/// missing or invalid signature (never retried), 500 on a store fault
/// during mutation (retried by the provider).
pub async fn billing_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<serde_json::Value>> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("No signature found".into()))?;

    billing::verify_signature(
        &body,
        signature,
        &state.config.billing.webhook_secret,
        chrono::Utc::now().timestamp(),
        state.config.billing.signature_tolerance_secs,
    )
    .map_err(|e| {
        tracing::warn!(error = %e, "Webhook signature verification failed");
        AppError::BadRequest("Webhook signature verification failed".into())
    })?;

    let event = billing::parse_event(&body)?;
    dispatch(&state, event).await?;

    Ok(Json(json!({ "received": true })))
}

/// Apply the event's profile mutation, if any.
async fn dispatch(state: &AppState, event: BillingEvent) -> AppResult<()> {
    let object = &event.data.object;

    match event.kind.as_str() {
        EVENT_CHECKOUT_COMPLETED => {
            // The checkout session carries the purchasing user's id in its
            // metadata. Without it the event can never be attributed, so
            // log and acknowledge rather than making the provider retry a
            // permanently malformed event.
            let Some(profile_id) = object.metadata_user_id() else {
                tracing::error!("No user id in checkout session metadata");
                return Ok(());
            };

            let updated = ProfileRepo::activate_subscription(
                &state.pool,
                profile_id,
                object.subscription.as_deref(),
                object.customer.as_deref(),
            )
            .await?;

            if updated {
                tracing::info!(profile_id, "Subscription activated");
            } else {
                tracing::error!(profile_id, "Checkout completed for unknown profile");
            }
        }

        EVENT_SUBSCRIPTION_UPDATED => {
            // Resolve the owner by metadata when present, falling back to
            // the stored billing customer reference.
            let profile_id = match object.metadata_user_id() {
                Some(id) => Some(id),
                None => match &object.customer {
                    Some(customer) => {
                        ProfileRepo::find_by_stripe_customer(&state.pool, customer)
                            .await?
                            .map(|p| p.id)
                    }
                    None => None,
                },
            };

            let Some(profile_id) = profile_id else {
                tracing::error!("No profile found for subscription update");
                return Ok(());
            };

            let status = object.status.as_deref().unwrap_or_default();
            ProfileRepo::apply_subscription_status(&state.pool, profile_id, status).await?;
            tracing::info!(
                profile_id,
                status,
                is_pro = tier::status_grants_pro(status),
                "Subscription status applied"
            );
        }

        EVENT_SUBSCRIPTION_DELETED => {
            let Some(customer) = &object.customer else {
                tracing::error!("Subscription deletion without customer reference");
                return Ok(());
            };

            match ProfileRepo::find_by_stripe_customer(&state.pool, customer).await? {
                Some(profile) => {
                    ProfileRepo::cancel_subscription(&state.pool, profile.id).await?;
                    tracing::info!(profile_id = profile.id, "Subscription canceled");
                }
                None => {
                    tracing::error!("No profile found for deleted subscription's customer");
                }
            }
        }

        // Forward compatibility: unknown event kinds are acknowledged
        // without error so new provider events never break delivery.
        other => {
            tracing::debug!(kind = other, "Unhandled billing event type");
        }
    }

    Ok(())
}
