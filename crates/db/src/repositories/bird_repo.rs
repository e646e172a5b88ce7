//! Repository for the `birds` table.

use sqlx::PgPool;

use aviary_core::types::DbId;

use crate::models::bird::{Bird, CreateBird, UpdateBird};

/// Column list shared across queries. Excludes the audit timestamps,
/// which are never serialized to clients.
const COLUMNS: &str = "id, name, species, image";

/// Provides CRUD operations for birds.
pub struct BirdRepo;

impl BirdRepo {
    /// Insert a new bird, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBird) -> Result<Bird, sqlx::Error> {
        let query = format!(
            "INSERT INTO birds (name, species, image)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bird>(&query)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// List all birds in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Bird>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM birds ORDER BY id");
        sqlx::query_as::<_, Bird>(&query).fetch_all(pool).await
    }

    /// Find a bird by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Bird>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM birds WHERE id = $1");
        sqlx::query_as::<_, Bird>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a bird. Fields left `None` keep their stored
    /// values. Returns `None` when no row matches.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBird,
    ) -> Result<Option<Bird>, sqlx::Error> {
        let query = format!(
            "UPDATE birds SET
                name = COALESCE($2, name),
                species = COALESCE($3, species),
                image = COALESCE($4, image),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bird>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bird. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM birds WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
