use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use super::repo::RideListItem;
use crate::error::ApiError;

/// Create/edit payload. Driver flags default to passenger; date and both
/// locations are required, legs without a location are not accepted through
/// the form.
#[derive(Debug, Deserialize)]
pub struct RideRequest {
    pub date: Option<Date>,
    pub go_location_id: Option<Uuid>,
    #[serde(default)]
    pub go_driver: bool,
    pub back_location_id: Option<Uuid>,
    #[serde(default)]
    pub back_driver: bool,
}

/// Validated form of [`RideRequest`].
#[derive(Debug, Clone, Copy)]
pub struct RideInput {
    pub date: Date,
    pub go_location_id: Uuid,
    pub go_driver: bool,
    pub back_location_id: Uuid,
    pub back_driver: bool,
}

impl RideRequest {
    pub fn validate(self) -> Result<RideInput, ApiError> {
        let (Some(date), Some(go_location_id), Some(back_location_id)) =
            (self.date, self.go_location_id, self.back_location_id)
        else {
            return Err(ApiError::Validation(
                "date, go location and back location are required".into(),
            ));
        };
        Ok(RideInput {
            date,
            go_location_id,
            go_driver: self.go_driver,
            back_location_id,
            back_driver: self.back_driver,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RideListResponse {
    pub selected_month: String,
    pub rides: Vec<RideListItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn validate_requires_date_and_both_locations() {
        let req = RideRequest {
            date: None,
            go_location_id: Some(Uuid::new_v4()),
            go_driver: false,
            back_location_id: Some(Uuid::new_v4()),
            back_driver: false,
        };
        assert!(matches!(req.validate(), Err(ApiError::Validation(_))));

        let req = RideRequest {
            date: Some(date!(2025 - 07 - 01)),
            go_location_id: Some(Uuid::new_v4()),
            go_driver: true,
            back_location_id: None,
            back_driver: false,
        };
        assert!(matches!(req.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn driver_flags_default_to_passenger() {
        let req: RideRequest = serde_json::from_value(serde_json::json!({
            "date": "2025-07-01",
            "go_location_id": Uuid::new_v4(),
            "back_location_id": Uuid::new_v4(),
        }))
        .unwrap();
        let input = req.validate().unwrap();
        assert!(!input.go_driver);
        assert!(!input.back_driver);
    }
}
