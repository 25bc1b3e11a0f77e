//! Free/Pro tier policy.
//!
//! The tier gate is a pure predicate over the profile's `is_pro` flag and
//! nothing else. It is re-evaluated on every request by the API layer (no
//! caching), so a revoked subscription is denied on the very next call.
//!
//! The schema also carries `trial_ends_at`, which this gate deliberately
//! does NOT consult. Whether that field is dead schema or a future
//! time-boxed trial is unresolved product-side; until clarified the gate is
//! flag-only.

use crate::error::CoreError;

/// Maximum number of prompts a free-tier owner may store.
pub const FREE_PROMPT_LIMIT: i64 = 50;

/// Subscription status reported by the billing provider for a live paid
/// subscription. The only status that maps to `is_pro = true`.
pub const STATUS_ACTIVE: &str = "active";

/// Status written locally when the provider reports a subscription deletion.
pub const STATUS_CANCELED: &str = "canceled";

/// Prompt cap for an owner, `None` meaning unlimited.
pub fn prompt_limit(is_pro: bool) -> Option<i64> {
    if is_pro {
        None
    } else {
        Some(FREE_PROMPT_LIMIT)
    }
}

/// Whether a reported subscription status grants the Pro tier.
pub fn status_grants_pro(status: &str) -> bool {
    status == STATUS_ACTIVE
}

/// Build the denial error for a Pro-only feature.
pub fn upgrade_required(feature: &str) -> CoreError {
    CoreError::UpgradeRequired(format!("{feature} is a Pro feature"))
}

/// Build the denial error for the free-tier prompt cap.
pub fn prompt_limit_reached() -> CoreError {
    CoreError::UpgradeRequired(format!(
        "Free tier limit of {FREE_PROMPT_LIMIT} prompts reached. Upgrade to Pro for unlimited prompts."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_tier_is_capped_pro_is_not() {
        assert_eq!(prompt_limit(false), Some(50));
        assert_eq!(prompt_limit(true), None);
    }

    #[test]
    fn only_active_status_grants_pro() {
        assert!(status_grants_pro("active"));
        assert!(!status_grants_pro("past_due"));
        assert!(!status_grants_pro("canceled"));
        assert!(!status_grants_pro("trialing"));
        assert!(!status_grants_pro(""));
    }

    #[test]
    fn denial_errors_use_the_upgrade_variant() {
        assert!(matches!(
            upgrade_required("Export"),
            CoreError::UpgradeRequired(_)
        ));
        let err = prompt_limit_reached();
        match err {
            CoreError::UpgradeRequired(msg) => {
                assert!(msg.contains("50"), "message should state the cap");
                assert!(msg.contains("Upgrade to Pro"));
            }
            other => panic!("expected UpgradeRequired, got {other:?}"),
        }
    }
}
