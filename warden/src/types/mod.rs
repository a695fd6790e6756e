mod auth;
mod balance;
mod enums;
mod transaction;
mod wallet;

pub use auth::{AuthPayload, UserInfo};
pub use balance::BalanceInfo;
pub use enums::Network;
pub use transaction::{TransactionRecord, TransferReceipt};
pub use wallet::{Me, Wallet};
