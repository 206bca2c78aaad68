use std::collections::BTreeMap;

use uuid::Uuid;

use super::repo::MonthlyRideRow;

/// Per-user monthly totals: what the user spent as passenger versus the
/// price of the legs they drove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTotals {
    pub name: String,
    pub ride_total: i64,
    pub drive_total: i64,
}

/// Sums each user's passenger and driver leg prices for one month.
///
/// The two legs of a record contribute independently, so a single record can
/// feed both totals (drove out, rode back). A leg without a location
/// contributes nothing. Keyed by user id in a BTreeMap so the result is
/// independent of input order.
pub fn aggregate(rows: &[MonthlyRideRow]) -> BTreeMap<Uuid, UserTotals> {
    let mut totals: BTreeMap<Uuid, UserTotals> = BTreeMap::new();

    for row in rows {
        let entry = totals.entry(row.user_id).or_insert_with(|| UserTotals {
            name: row.name.clone(),
            ride_total: 0,
            drive_total: 0,
        });
        for (driver, price) in [(row.go_driver, row.go_price), (row.back_driver, row.back_price)] {
            let price = i64::from(price.unwrap_or(0));
            if driver {
                entry.drive_total += price;
            } else {
                entry.ride_total += price;
            }
        }
    }

    totals
}
