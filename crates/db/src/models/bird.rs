//! Bird entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use aviary_core::types::DbId;

/// A row from the `birds` table, projected to the fields the API
/// exposes. The audit timestamps stay in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bird {
    pub id: DbId,
    pub name: String,
    pub species: String,
    pub image: String,
}

/// DTO for creating a new bird. All fields are required; a missing
/// field is rejected during deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateBird {
    pub name: String,
    pub species: String,
    pub image: String,
}

/// DTO for partially updating a bird. Absent fields keep their stored
/// values. Unknown keys (including `id`) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBird {
    pub name: Option<String>,
    pub species: Option<String>,
    pub image: Option<String>,
}
