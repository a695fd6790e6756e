use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Network;

/// On-chain balance snapshot for a single address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceInfo {
    pub address: String,
    /// Balance in ether, as reported by the backend.
    pub balance: Decimal,
    pub balance_in_wei: String,
    pub network: Network,
    pub last_updated: DateTime<Utc>,
}
