//! Billing provider webhook events: payload types and signature verification.
//!
//! The billing provider delivers subscription lifecycle events as signed
//! HTTP callbacks. The signature scheme is the provider's standard one: a
//! header of the form `t=<unix-seconds>,v1=<hex>` where `v1` is the
//! HMAC-SHA256 of `"{t}.{raw body}"` under a shared secret. Verification
//! must happen on the raw body bytes before any JSON parsing.

use std::collections::HashMap;

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::error::CoreError;
use crate::types::DbId;

type HmacSha256 = Hmac<Sha256>;

/// Event kind for a completed checkout session (initial upgrade to Pro).
pub const EVENT_CHECKOUT_COMPLETED: &str = "checkout.session.completed";

/// Event kind for a subscription status change.
pub const EVENT_SUBSCRIPTION_UPDATED: &str = "customer.subscription.updated";

/// Event kind for a subscription cancellation.
pub const EVENT_SUBSCRIPTION_DELETED: &str = "customer.subscription.deleted";

/// Metadata key under which checkout sessions carry the owning user's id.
pub const METADATA_USER_KEY: &str = "vault_user_id";

/// Maximum allowed clock skew between the signature timestamp and now.
pub const DEFAULT_SIGNATURE_TOLERANCE_SECS: i64 = 300;

/// A webhook event envelope from the billing provider.
///
/// Only the fields this service consumes are modeled; everything else in
/// the payload is ignored so new provider fields never break parsing.
#[derive(Debug, Deserialize)]
pub struct BillingEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: EventData,
}

#[derive(Debug, Deserialize)]
pub struct EventData {
    pub object: EventObject,
}

/// The `data.object` of an event: a checkout session or a subscription,
/// depending on the event kind. Fields absent for a given kind default to
/// empty/`None`.
#[derive(Debug, Default, Deserialize)]
pub struct EventObject {
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub subscription: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl EventObject {
    /// The owning user's id from event metadata, if present and well-formed.
    pub fn metadata_user_id(&self) -> Option<DbId> {
        self.metadata
            .get(METADATA_USER_KEY)
            .and_then(|v| v.parse::<DbId>().ok())
    }
}

/// Parse a raw (already signature-verified) event body.
pub fn parse_event(body: &[u8]) -> Result<BillingEvent, CoreError> {
    serde_json::from_slice(body)
        .map_err(|e| CoreError::Validation(format!("Malformed webhook payload: {e}")))
}

/// Webhook signature verification failures. All of these map to a 400
/// response and are never retried by the provider.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Malformed signature header")]
    MalformedHeader,

    #[error("Signature timestamp outside tolerance")]
    TimestampOutOfTolerance,

    #[error("Signature mismatch")]
    Mismatch,
}

/// Verify a webhook signature header against the raw request body.
///
/// `now` is the current Unix time in seconds; signatures whose timestamp
/// differs from it by more than `tolerance_secs` are rejected to blunt
/// replay of captured deliveries. Any `v1` candidate in the header may
/// match (the provider sends multiples during secret rotation).
pub fn verify_signature(
    payload: &[u8],
    header: &str,
    secret: &str,
    now: i64,
    tolerance_secs: i64,
) -> Result<(), SignatureError> {
    let (timestamp, candidates) = parse_signature_header(header)?;

    if (now - timestamp).abs() > tolerance_secs {
        return Err(SignatureError::TimestampOutOfTolerance);
    }

    for candidate in candidates {
        let Ok(expected) = hex::decode(candidate) else {
            continue;
        };
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| SignatureError::Mismatch)?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        if mac.verify_slice(&expected).is_ok() {
            return Ok(());
        }
    }

    Err(SignatureError::Mismatch)
}

/// Compute the signature header value for a payload. Used by webhook
/// delivery tooling and tests; the service itself only verifies.
pub fn signature_header(secret: &str, timestamp: i64, payload: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    let digest = hex::encode(mac.finalize().into_bytes());
    format!("t={timestamp},v1={digest}")
}

/// Split a `t=...,v1=...` header into its timestamp and `v1` candidates.
fn parse_signature_header(header: &str) -> Result<(i64, Vec<&str>), SignatureError> {
    let mut timestamp: Option<i64> = None;
    let mut candidates: Vec<&str> = Vec::new();

    for part in header.split(',') {
        let Some((key, value)) = part.split_once('=') else {
            return Err(SignatureError::MalformedHeader);
        };
        match key.trim() {
            "t" => {
                timestamp =
                    Some(value.parse().map_err(|_| SignatureError::MalformedHeader)?);
            }
            "v1" => candidates.push(value),
            // Older or unknown schemes (e.g. v0) are ignored.
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or(SignatureError::MalformedHeader)?;
    if candidates.is_empty() {
        return Err(SignatureError::MalformedHeader);
    }
    Ok((timestamp, candidates))
}
