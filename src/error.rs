use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Request-level error taxonomy. Every variant is recovered at the request
/// boundary and surfaced as a JSON message; writes are single statements, so
/// a failed request commits nothing.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("a ride record already exists for this date")]
    DuplicateDate,

    #[error("ride record not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateDate => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            error!(error = %e, "internal error");
        }
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            sqlx::Error::Database(db)
                if db.is_unique_violation()
                    && db.constraint() == Some("ride_records_user_date_key") =>
            {
                ApiError::DuplicateDate
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                ApiError::Validation("unknown location".into())
            }
            _ => ApiError::Internal(e.into()),
        }
    }
}
