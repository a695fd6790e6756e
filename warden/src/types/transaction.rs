use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Network;

/// Receipt returned by the `sendFunds` mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferReceipt {
    pub transaction_hash: String,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub amount_in_ether: Decimal,
    pub status: String,
    pub network: Network,
}

/// A historical transaction record; owned by the backend, read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub transaction_hash: String,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub amount_in_ether: Decimal,
    pub status: String,
    pub network: Network,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub gas_used: Option<String>,
    #[serde(default)]
    pub gas_price: Option<String>,
    pub created_at: DateTime<Utc>,
}
