//! Repository for the `prompts` table. All queries are owner-scoped.

use sqlx::PgPool;
use vault_core::types::DbId;

use crate::models::prompt::{CreatePrompt, Prompt, PromptWithFolder, UpdatePrompt};

/// Column list for `prompts` queries.
const COLUMNS: &str =
    "id, owner_id, folder_id, title, content, tags, is_favorite, created_at, updated_at";

/// Column list for joined prompt+folder queries, qualified to the `p` alias.
const JOINED_COLUMNS: &str = "p.id, p.owner_id, p.folder_id, f.name AS folder_name, p.title, \
                              p.content, p.tags, p.is_favorite, p.created_at, p.updated_at";

/// Outcome of a capped prompt insert.
///
/// A structured result instead of a message substring to match on: the
/// handler translates `LimitReached` into the upgrade-prompt error kind.
#[derive(Debug)]
pub enum PromptInsert {
    Created(Prompt),
    /// The owner is at their prompt cap; nothing was inserted.
    LimitReached,
}

/// Provides CRUD operations for prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// Insert a new prompt, enforcing the owner's prompt cap in the same
    /// statement (`max_prompts = None` means unlimited). The conditional
    /// insert saves a separate count round trip; under READ COMMITTED two
    /// concurrent creates at the boundary can still land one row over the
    /// cap, which is acceptable for a usage nudge.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreatePrompt,
        max_prompts: Option<i64>,
    ) -> Result<PromptInsert, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (owner_id, folder_id, title, content, tags)
             SELECT $1, $2, $3, $4, $5
             WHERE $6::BIGINT IS NULL
                OR (SELECT COUNT(*) FROM prompts WHERE owner_id = $1) < $6
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Prompt>(&query)
            .bind(owner_id)
            .bind(input.folder_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.tags)
            .bind(max_prompts)
            .fetch_optional(pool)
            .await?;

        Ok(match inserted {
            Some(prompt) => PromptInsert::Created(prompt),
            None => PromptInsert::LimitReached,
        })
    }

    /// List an owner's prompts, newest first, with folder names resolved.
    pub async fn list_with_folder_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<PromptWithFolder>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM prompts p
             LEFT JOIN folders f ON f.id = p.folder_id
             WHERE p.owner_id = $1
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, PromptWithFolder>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Find a prompt by ID, visible only to its owner.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a prompt's editable fields. A `None` folder clears the
    /// reference.
    ///
    /// Returns `None` if the owner has no prompt with the given `id`.
    pub async fn update_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdatePrompt,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET
                title = $3,
                content = $4,
                tags = $5,
                folder_id = $6,
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.tags)
            .bind(input.folder_id)
            .fetch_optional(pool)
            .await
    }

    /// Flip the favorite flag, returning the updated row.
    pub async fn toggle_favorite_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET
                is_favorite = NOT is_favorite,
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a prompt (no soft-delete).
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count an owner's prompts (free-tier usage display).
    pub async fn count_for_owner(pool: &PgPool, owner_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM prompts WHERE owner_id = $1")
                .bind(owner_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }
}
