use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{RideInput, RideListResponse, RideRequest};
use super::repo::{self, RideRecord};
use crate::{
    auth::AuthUser,
    error::ApiError,
    month::{Month, MonthQuery},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/rides", get(list_rides))
        .route("/rides/:id", get(get_ride))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/rides", post(create_ride))
        .route("/rides/:id", put(update_ride).delete(delete_ride))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_rides(
    State(state): State<AppState>,
    user: AuthUser,
    Query(q): Query<MonthQuery>,
) -> Result<Json<RideListResponse>, ApiError> {
    let month = Month::resolve(q.month.as_deref());
    let rides = repo::list_by_user_and_month(&state.db, user.id, &month).await?;
    Ok(Json(RideListResponse {
        selected_month: month.as_str().to_string(),
        rides,
    }))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn get_ride(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<RideRecord>, ApiError> {
    let record = repo::get(&state.db, id, user.id).await?;
    Ok(Json(record))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_ride(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<RideRequest>,
) -> Result<(StatusCode, Json<RideRecord>), ApiError> {
    let input = payload.validate()?;
    check_locations(&state, &input)?;

    let record = repo::insert(&state.db, user.id, input).await?;
    info!(record_id = %record.id, date = %record.date, "ride record created");
    Ok((StatusCode::CREATED, Json(record)))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_ride(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RideRequest>,
) -> Result<Json<RideRecord>, ApiError> {
    let input = payload.validate()?;
    check_locations(&state, &input)?;

    let record = repo::update(&state.db, id, user.id, input).await?;
    info!(record_id = %record.id, "ride record updated");
    Ok(Json(record))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_ride(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    repo::delete(&state.db, id, user.id).await?;
    info!(record_id = %id, "ride record deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn check_locations(state: &AppState, input: &RideInput) -> Result<(), ApiError> {
    if !state.locations.contains(input.go_location_id)
        || !state.locations.contains(input.back_location_id)
    {
        return Err(ApiError::Validation("unknown location".into()));
    }
    Ok(())
}
