use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Network;

/// A custodial wallet owned by the backend; read-only on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub address: String,
    pub network: Network,
    pub created_at: DateTime<Utc>,
}

/// The `me` query: current user plus their wallets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Me {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub wallets: Vec<Wallet>,
}
