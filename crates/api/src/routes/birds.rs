//! Route definitions for the bird resource.
//!
//! Mounted at `/birds` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::birds;
use crate::state::AppState;

/// Bird routes.
///
/// ```text
/// GET    /           -> list_birds
/// POST   /           -> create_bird
/// GET    /{id}       -> get_bird
/// PATCH  /{id}       -> update_bird
/// DELETE /{id}       -> delete_bird
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(birds::list_birds).post(birds::create_bird))
        .route(
            "/{id}",
            get(birds::get_bird)
                .patch(birds::update_bird)
                .delete(birds::delete_bird),
        )
}
