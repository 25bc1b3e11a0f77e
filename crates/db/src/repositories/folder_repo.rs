//! Repository for the `folders` table. All queries are owner-scoped.

use sqlx::PgPool;
use vault_core::types::DbId;

use crate::models::folder::{CreateFolder, Folder, UpdateFolder};

/// Column list for `folders` queries.
const COLUMNS: &str = "id, owner_id, name, description, created_at, updated_at";

/// Provides CRUD operations for folders.
pub struct FolderRepo;

impl FolderRepo {
    /// Insert a new folder for an owner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateFolder,
    ) -> Result<Folder, sqlx::Error> {
        let query = format!(
            "INSERT INTO folders (owner_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List an owner's folders, alphabetically by name.
    pub async fn list_for_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders WHERE owner_id = $1 ORDER BY name");
        sqlx::query_as::<_, Folder>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Find a folder by ID, visible only to its owner.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a folder. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the owner has no folder with the given `id`.
    pub async fn update_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateFolder,
    ) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!(
            "UPDATE folders SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a folder. Prompts referencing it keep existing with their
    /// `folder_id` cleared by the `ON DELETE SET NULL` constraint.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
