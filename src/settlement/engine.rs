use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use super::aggregate::UserTotals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    /// final_amount > 0: this user is owed money.
    Receive,
    /// final_amount <= 0: this user pays (zero settles as pay).
    Pay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementLine {
    pub user_id: Uuid,
    pub name: String,
    pub ride_total: i64,
    pub drive_total: i64,
    pub drive_reward: i64,
    pub final_amount: i64,
    pub status: SettlementStatus,
}

/// Redistributes the month's total passenger spending to its drivers,
/// proportionally to how much of the group's driving each user did.
///
/// reward = group_ride_sum * drive_total / group_drive_sum, or 0 when nobody
/// drove. final_amount = reward - ride_total, rounded half-to-even; that
/// rounding policy is fixed so repeated runs and both settlement views agree
/// to the unit.
///
/// Pure function of the totals multiset: no storage access, identical output
/// for identical input regardless of how the input was assembled.
pub fn settle(totals: &BTreeMap<Uuid, UserTotals>) -> Vec<SettlementLine> {
    let group_ride_sum: i64 = totals.values().map(|t| t.ride_total).sum();
    let group_drive_sum: i64 = totals.values().map(|t| t.drive_total).sum();

    totals
        .iter()
        .map(|(&user_id, t)| {
            let reward = if group_drive_sum > 0 {
                group_ride_sum as f64 * t.drive_total as f64 / group_drive_sum as f64
            } else {
                0.0
            };
            let final_amount = (reward - t.ride_total as f64).round_ties_even() as i64;
            let status = if final_amount > 0 {
                SettlementStatus::Receive
            } else {
                SettlementStatus::Pay
            };
            SettlementLine {
                user_id,
                name: t.name.clone(),
                ride_total: t.ride_total,
                drive_total: t.drive_total,
                drive_reward: reward.round_ties_even() as i64,
                final_amount,
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn totals_from(pairs: &[(i64, i64)]) -> BTreeMap<Uuid, UserTotals> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(ride_total, drive_total))| {
                (
                    Uuid::from_u128(i as u128 + 1),
                    UserTotals {
                        name: format!("user{i}"),
                        ride_total,
                        drive_total,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn mirror_pair_settles_symmetrically() {
        // U1: rode 50, drove 100. U2: rode 100, drove 50.
        let totals = totals_from(&[(50, 100), (100, 50)]);
        let lines = settle(&totals);

        assert_eq!(lines[0].drive_reward, 100);
        assert_eq!(lines[0].final_amount, 50);
        assert_eq!(lines[0].status, SettlementStatus::Receive);

        assert_eq!(lines[1].drive_reward, 50);
        assert_eq!(lines[1].final_amount, -50);
        assert_eq!(lines[1].status, SettlementStatus::Pay);
    }

    #[test]
    fn nobody_drove_everyone_owes_their_spending() {
        // One user, rode both legs at price 50, nobody drove.
        let totals = totals_from(&[(100, 0)]);
        let lines = settle(&totals);

        assert_eq!(lines[0].drive_reward, 0);
        assert_eq!(lines[0].final_amount, -100);
        assert_eq!(lines[0].status, SettlementStatus::Pay);
    }

    #[test]
    fn zero_final_amount_is_pay() {
        // Sole driver who also spent exactly the pool: reward == ride_total.
        let totals = totals_from(&[(100, 100)]);
        let lines = settle(&totals);
        assert_eq!(lines[0].final_amount, 0);
        assert_eq!(lines[0].status, SettlementStatus::Pay);
    }

    #[test]
    fn empty_month_yields_no_lines() {
        assert!(settle(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn fractional_rewards_round_half_to_even() {
        // ride_sum = 25, drive_sum = 50, each drove 25 -> reward 12.5 each,
        // final = 12.5 and -12.5 round to 12 and -12.
        let totals = totals_from(&[(0, 25), (25, 25)]);
        let lines = settle(&totals);
        assert_eq!(lines[0].final_amount, 12);
        assert_eq!(lines[1].final_amount, -12);
    }

    fn bounded(pairs: Vec<(u16, u16)>) -> Vec<(i64, i64)> {
        pairs
            .into_iter()
            .map(|(r, d)| (i64::from(r), i64::from(d)))
            .collect()
    }

    #[quickcheck]
    fn no_driving_means_reward_zero_for_all(rides: Vec<u16>) -> bool {
        let pairs: Vec<(i64, i64)> = rides.into_iter().map(|r| (i64::from(r), 0)).collect();
        let lines = settle(&totals_from(&pairs));
        lines
            .iter()
            .all(|l| l.drive_reward == 0 && l.final_amount == -l.ride_total)
    }

    #[quickcheck]
    fn rewards_conserve_the_passenger_pool(pairs: Vec<(u16, u16)>) -> bool {
        let totals = totals_from(&bounded(pairs));
        let group_ride_sum: i64 = totals.values().map(|t| t.ride_total).sum();
        let group_drive_sum: i64 = totals.values().map(|t| t.drive_total).sum();
        if group_drive_sum == 0 {
            return true;
        }
        let lines = settle(&totals);
        let rewarded: i64 = lines.iter().map(|l| l.drive_reward).sum();
        // Each line rounds by at most 1/2, so the residue is bounded by n/2.
        let residue = (rewarded - group_ride_sum).abs() as f64;
        residue <= lines.len() as f64 / 2.0
    }

    #[quickcheck]
    fn settle_is_idempotent(pairs: Vec<(u16, u16)>) -> bool {
        let totals = totals_from(&bounded(pairs));
        settle(&totals) == settle(&totals)
    }

    #[quickcheck]
    fn status_follows_the_sign_of_final_amount(pairs: Vec<(u16, u16)>) -> bool {
        let lines = settle(&totals_from(&bounded(pairs)));
        lines.iter().all(|l| {
            (l.final_amount > 0) == (l.status == SettlementStatus::Receive)
        })
    }
}
