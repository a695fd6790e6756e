pub mod config;
pub mod error;
pub mod graphql;
pub mod notify;
pub mod portfolio;
pub mod session;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Client + config
pub use config::WardenConfig;
pub use error::{Result, WardenError};
pub use graphql::WardenClient;

// Session
pub use session::{Session, SessionStore};

// Notifications
pub use notify::{Notification, Notifier, Severity};

// Core enums
pub use types::Network;

// Auth types
pub use types::{AuthPayload, UserInfo};

// Wallet + balance
pub use types::{BalanceInfo, Me, Wallet};

// Transactions
pub use types::{TransactionRecord, TransferReceipt};

// Portfolio orchestration
pub use portfolio::{recent_activity, ActivityOptions, BalanceEntry, BalanceTracker};
