use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Static reference data: a named place and its fixed per-leg price.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub price: i32,
}

/// The full location table, loaded once at startup and read-only afterwards.
#[derive(Debug)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    pub async fn load(db: &PgPool) -> anyhow::Result<LocationRegistry> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, price
            FROM locations
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        tracing::info!(count = locations.len(), "location registry loaded");
        Ok(LocationRegistry { locations })
    }

    pub fn all(&self) -> &[Location] {
        &self.locations
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.locations.iter().any(|l| l.id == id)
    }

    #[cfg(test)]
    pub fn from_vec(locations: Vec<Location>) -> LocationRegistry {
        LocationRegistry { locations }
    }
}
