//! Profile entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vault_core::types::{DbId, Timestamp};

/// Full profile row from the `profiles` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`ProfileResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub is_pro: bool,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub subscription_status: Option<String>,
    /// Unused by the tier gate; kept for a possible time-boxed trial.
    pub trial_ends_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe profile representation for API responses (no password hash, no raw
/// billing references).
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: DbId,
    pub email: String,
    pub full_name: Option<String>,
    pub is_pro: bool,
    pub subscription_status: Option<String>,
    pub trial_ends_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            is_pro: profile.is_pro,
            subscription_status: profile.subscription_status,
            trial_ends_at: profile.trial_ends_at,
            created_at: profile.created_at,
        }
    }
}

/// DTO for creating a new profile at registration.
#[derive(Debug, Deserialize)]
pub struct CreateProfile {
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
}
