//! Handlers for the bird collection and item endpoints.
//!
//! All endpoints speak plain JSON: entities are returned directly,
//! without an envelope. Lookup misses map to 404 rather than surfacing
//! as server errors.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use aviary_core::error::CoreError;
use aviary_core::types::DbId;
use aviary_db::models::bird::{CreateBird, UpdateBird};
use aviary_db::repositories::BirdRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /birds
// ---------------------------------------------------------------------------

/// List all birds.
pub async fn list_birds(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let birds = BirdRepo::list(&state.pool).await?;

    Ok(Json(birds))
}

// ---------------------------------------------------------------------------
// POST /birds
// ---------------------------------------------------------------------------

/// Create a new bird. All three fields are required; the JSON extractor
/// rejects bodies with missing fields before this handler runs.
pub async fn create_bird(
    State(state): State<AppState>,
    Json(input): Json<CreateBird>,
) -> AppResult<impl IntoResponse> {
    let bird = BirdRepo::create(&state.pool, &input).await?;

    tracing::info!(bird_id = bird.id, name = %bird.name, "Bird created");

    Ok((StatusCode::CREATED, Json(bird)))
}

// ---------------------------------------------------------------------------
// GET /birds/{id}
// ---------------------------------------------------------------------------

/// Get a single bird by ID.
pub async fn get_bird(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let bird = BirdRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bird", id }))?;

    Ok(Json(bird))
}

// ---------------------------------------------------------------------------
// PATCH /birds/{id}
// ---------------------------------------------------------------------------

/// Partially update a bird. Only `name`, `species`, and `image` are
/// updatable; unknown keys (including `id`) are ignored, and absent
/// fields keep their stored values.
pub async fn update_bird(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBird>,
) -> AppResult<impl IntoResponse> {
    let bird = BirdRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bird", id }))?;

    tracing::info!(bird_id = bird.id, "Bird updated");

    Ok(Json(bird))
}

// ---------------------------------------------------------------------------
// DELETE /birds/{id}
// ---------------------------------------------------------------------------

/// Delete a bird. Deleting an already-deleted id reports 404.
pub async fn delete_bird(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BirdRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Bird", id }));
    }

    tracing::info!(bird_id = id, "Bird deleted");

    Ok(StatusCode::NO_CONTENT)
}
