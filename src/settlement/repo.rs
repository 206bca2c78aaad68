use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::ApiError;
use crate::month::Month;

/// One ride record of the selected month, joined with its leg prices and the
/// owner's display name. Legs with no location join to NULL prices.
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyRideRow {
    pub user_id: Uuid,
    pub name: String,
    pub go_driver: bool,
    pub back_driver: bool,
    pub go_price: Option<i32>,
    pub back_price: Option<i32>,
}

/// All users' records for one month, as consumed by the aggregator.
pub async fn list_by_month(db: &PgPool, month: &Month) -> Result<Vec<MonthlyRideRow>, ApiError> {
    let rows = sqlx::query_as::<_, MonthlyRideRow>(
        r#"
        SELECT r.user_id, u.name, r.go_driver, r.back_driver,
               g.price AS go_price, b.price AS back_price
        FROM ride_records r
        JOIN users u ON u.id = r.user_id
        LEFT JOIN locations g ON g.id = r.go_location_id
        LEFT JOIN locations b ON b.id = r.back_location_id
        WHERE to_char(r.date, 'YYYY-MM') = $1
        "#,
    )
    .bind(month.as_str())
    .fetch_all(db)
    .await?;
    Ok(rows)
}
