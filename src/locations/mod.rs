mod handlers;
mod registry;

pub use registry::{Location, LocationRegistry};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}
