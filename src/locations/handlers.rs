use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::registry::Location;
use crate::{auth::AuthUser, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/locations", get(list_locations))
}

/// The registry, for the ride registration form.
#[instrument(skip(state, _user))]
pub async fn list_locations(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Json<Vec<Location>> {
    Json(state.locations.all().to_vec())
}
