//! Repository for the `profiles` table.
//!
//! The subscription mutation methods (`activate_subscription`,
//! `apply_subscription_status`, `cancel_subscription`) are last-write-wins
//! field assignments, which is what makes the webhook reconciler idempotent
//! under at-least-once delivery.

use sqlx::PgPool;
use vault_core::tier;
use vault_core::types::DbId;

use crate::models::profile::{CreateProfile, Profile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, full_name, is_pro, stripe_customer_id, \
                       stripe_subscription_id, subscription_status, trial_ends_at, \
                       created_at, updated_at";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile (free tier), returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (email, password_hash, full_name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.full_name)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a profile by email (case-sensitive).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE email = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find the profile whose stored billing customer reference matches.
    pub async fn find_by_stripe_customer(
        pool: &PgPool,
        customer_id: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE stripe_customer_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(customer_id)
            .fetch_optional(pool)
            .await
    }

    /// Grant Pro after a completed checkout: sets `is_pro = true`, status
    /// `"active"`, and stores the subscription and customer references
    /// (keeping any existing customer reference when the event omits one).
    ///
    /// Returns `true` if the profile existed and was updated.
    pub async fn activate_subscription(
        pool: &PgPool,
        id: DbId,
        subscription_id: Option<&str>,
        customer_id: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE profiles SET
                is_pro = true,
                subscription_status = $2,
                stripe_subscription_id = COALESCE($3, stripe_subscription_id),
                stripe_customer_id = COALESCE($4, stripe_customer_id),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(tier::STATUS_ACTIVE)
        .bind(subscription_id)
        .bind(customer_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Store a reported subscription status verbatim and derive the Pro
    /// flag from it (`is_pro` iff the status is `"active"`).
    pub async fn apply_subscription_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE profiles SET
                is_pro = $2,
                subscription_status = $3,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(tier::status_grants_pro(status))
        .bind(status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Drop the profile back to the free tier with status `"canceled"`.
    pub async fn cancel_subscription(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE profiles SET
                is_pro = false,
                subscription_status = $2,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(tier::STATUS_CANCELED)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
