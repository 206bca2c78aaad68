use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::Date;
use uuid::Uuid;

use super::dto::RideInput;
use crate::error::ApiError;
use crate::month::Month;

/// A ride record as persisted: one row per user per day, two legs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RideRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: Date,
    pub go_location_id: Option<Uuid>,
    pub go_driver: bool,
    pub back_location_id: Option<Uuid>,
    pub back_driver: bool,
}

/// A record joined with its location names, for the month listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RideListItem {
    pub id: Uuid,
    pub date: Date,
    pub go_location: Option<String>,
    pub go_driver: bool,
    pub back_location: Option<String>,
    pub back_driver: bool,
}

/// The (user_id, date) UNIQUE constraint turns a duplicate-date insert into
/// DuplicateDate with no read-then-write window.
pub async fn insert(db: &PgPool, user_id: Uuid, input: RideInput) -> Result<RideRecord, ApiError> {
    let record = sqlx::query_as::<_, RideRecord>(
        r#"
        INSERT INTO ride_records (user_id, date, go_location_id, go_driver, back_location_id, back_driver)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, date, go_location_id, go_driver, back_location_id, back_driver
        "#,
    )
    .bind(user_id)
    .bind(input.date)
    .bind(input.go_location_id)
    .bind(input.go_driver)
    .bind(input.back_location_id)
    .bind(input.back_driver)
    .fetch_one(db)
    .await?;
    Ok(record)
}

/// Full replace of an owned record.
pub async fn update(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
    input: RideInput,
) -> Result<RideRecord, ApiError> {
    let record = sqlx::query_as::<_, RideRecord>(
        r#"
        UPDATE ride_records
        SET date = $1, go_location_id = $2, go_driver = $3, back_location_id = $4, back_driver = $5
        WHERE id = $6 AND user_id = $7
        RETURNING id, user_id, date, go_location_id, go_driver, back_location_id, back_driver
        "#,
    )
    .bind(input.date)
    .bind(input.go_location_id)
    .bind(input.go_driver)
    .bind(input.back_location_id)
    .bind(input.back_driver)
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await?
    .ok_or(ApiError::NotFound)?;
    Ok(record)
}

/// Delete is ownership-checked: an absent or unowned id is NotFound.
pub async fn delete(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
    let result = sqlx::query(
        r#"
        DELETE FROM ride_records
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(db)
    .await?;
    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(())
}

pub async fn get(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<RideRecord, ApiError> {
    let record = sqlx::query_as::<_, RideRecord>(
        r#"
        SELECT id, user_id, date, go_location_id, go_driver, back_location_id, back_driver
        FROM ride_records
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await?
    .ok_or(ApiError::NotFound)?;
    Ok(record)
}

/// The caller's records for one month, most recent date first.
pub async fn list_by_user_and_month(
    db: &PgPool,
    user_id: Uuid,
    month: &Month,
) -> Result<Vec<RideListItem>, ApiError> {
    let rows = sqlx::query_as::<_, RideListItem>(
        r#"
        SELECT r.id, r.date, g.name AS go_location, r.go_driver,
               b.name AS back_location, r.back_driver
        FROM ride_records r
        LEFT JOIN locations g ON g.id = r.go_location_id
        LEFT JOIN locations b ON b.id = r.back_location_id
        WHERE r.user_id = $1
          AND to_char(r.date, 'YYYY-MM') = $2
        ORDER BY r.date DESC
        "#,
    )
    .bind(user_id)
    .bind(month.as_str())
    .fetch_all(db)
    .await?;
    Ok(rows)
}
