use serde::Serialize;

use super::engine::SettlementLine;

#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    pub selected_month: String,
    pub settlements: Vec<SettlementLine>,
}
