use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::dto::SettlementResponse;
use super::{aggregate, engine, repo};
use crate::{
    auth::AuthUser,
    error::ApiError,
    month::{Month, MonthQuery},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settlement", get(settlement_me))
        .route("/settlement/all", get(settlement_all))
}

/// The requester's settlement line, computed over the whole group so its
/// numbers match the global view for the same month.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn settlement_me(
    State(state): State<AppState>,
    user: AuthUser,
    Query(q): Query<MonthQuery>,
) -> Result<Json<SettlementResponse>, ApiError> {
    let month = Month::resolve(q.month.as_deref());
    let mut settlements = settle_month(&state, &month).await?;
    settlements.retain(|line| line.user_id == user.id);
    Ok(Json(SettlementResponse {
        selected_month: month.as_str().to_string(),
        settlements,
    }))
}

/// Every user's settlement line for the month.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn settlement_all(
    State(state): State<AppState>,
    user: AuthUser,
    Query(q): Query<MonthQuery>,
) -> Result<Json<SettlementResponse>, ApiError> {
    let month = Month::resolve(q.month.as_deref());
    let settlements = settle_month(&state, &month).await?;
    Ok(Json(SettlementResponse {
        selected_month: month.as_str().to_string(),
        settlements,
    }))
}

async fn settle_month(
    state: &AppState,
    month: &Month,
) -> Result<Vec<engine::SettlementLine>, ApiError> {
    let rows = repo::list_by_month(&state.db, month).await?;
    let totals = aggregate::aggregate(&rows);
    Ok(engine::settle(&totals))
}
