//! Client-side portfolio orchestration.
//!
//! [`BalanceTracker`] keeps a per-address balance cache with an
//! unloaded → loading → loaded|errored state machine and at most one
//! in-flight refresh per address. [`recent_activity`] sequentially merges the
//! most recent transactions across wallets, halting early on rate limiting.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, error};

use crate::error::WardenError;
use crate::graphql::WardenClient;
use crate::types::{Network, TransactionRecord, Wallet};

/// Client-side timeout for a single balance refresh.
const BALANCE_TIMEOUT: Duration = Duration::from_secs(30);

/// Entry error text when a refresh hits the rate limiter.
const RATE_LIMIT_ENTRY_ERROR: &str = "Rate limit exceeded. Please wait a moment and try again.";

/// Cached balance state for one address.
///
/// `balance` always holds the last known value (zero before the first
/// successful refresh), so a loading or errored entry still contributes to
/// the portfolio total.
#[derive(Debug, Clone, Default)]
pub struct BalanceEntry {
    pub balance: Decimal,
    pub loading: bool,
    pub error: Option<String>,
    pub last_refreshed: Option<DateTime<Utc>>,
}

/// Outcome of a [`BalanceTracker::refresh`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Another refresh for this address was already in flight; nothing sent.
    Skipped,
    /// Fresh balance applied.
    Updated,
    /// Request failed or timed out; the entry is errored.
    Failed,
}

/// Shared per-address balance cache. Cheap to clone.
#[derive(Debug, Clone)]
pub struct BalanceTracker {
    entries: Arc<Mutex<HashMap<String, BalanceEntry>>>,
    timeout: Duration,
}

impl Default for BalanceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceTracker {
    pub fn new() -> Self {
        Self::with_timeout(BALANCE_TIMEOUT)
    }

    /// Tracker with a custom per-refresh timeout (tests).
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            timeout,
        }
    }

    /// Refresh the balance for `address`.
    ///
    /// At most one refresh per address is in flight: a duplicate call while
    /// one is loading returns [`Refresh::Skipped`] without issuing a request.
    /// A refresh that exceeds the timeout marks the entry errored; the
    /// underlying result, if it ever arrives, is discarded.
    pub async fn refresh(
        &self,
        client: &WardenClient,
        address: &str,
        network: Network,
    ) -> Refresh {
        if !self.begin(address) {
            debug!(address, "balance refresh already in flight, skipping");
            return Refresh::Skipped;
        }

        match tokio::time::timeout(self.timeout, client.balance(address, network)).await {
            Ok(Ok(info)) => {
                self.complete(address, info.balance, info.last_updated);
                Refresh::Updated
            }
            Ok(Err(e)) => {
                error!(address, error = %e, "balance refresh failed");
                let message = if e.is_rate_limited() {
                    RATE_LIMIT_ENTRY_ERROR.to_string()
                } else {
                    e.to_string()
                };
                self.fail(address, message);
                Refresh::Failed
            }
            Err(_) => {
                self.fail(
                    address,
                    format!(
                        "Request timeout: balance check took longer than {}s",
                        self.timeout.as_secs()
                    ),
                );
                Refresh::Failed
            }
        }
    }

    /// Transition `address` to loading. Returns false if already loading.
    fn begin(&self, address: &str) -> bool {
        let mut entries = self.entries.lock().expect("balance lock poisoned");
        let entry = entries.entry(address.to_string()).or_default();
        if entry.loading {
            return false;
        }
        entry.loading = true;
        entry.error = None;
        true
    }

    fn complete(&self, address: &str, balance: Decimal, at: DateTime<Utc>) {
        let mut entries = self.entries.lock().expect("balance lock poisoned");
        let entry = entries.entry(address.to_string()).or_default();
        entry.balance = balance;
        entry.loading = false;
        entry.error = None;
        entry.last_refreshed = Some(at);
    }

    fn fail(&self, address: &str, message: String) {
        let mut entries = self.entries.lock().expect("balance lock poisoned");
        let entry = entries.entry(address.to_string()).or_default();
        entry.loading = false;
        entry.error = Some(message);
    }

    /// Snapshot of one entry.
    pub fn entry(&self, address: &str) -> Option<BalanceEntry> {
        self.entries
            .lock()
            .expect("balance lock poisoned")
            .get(address)
            .cloned()
    }

    /// Snapshot of the whole cache.
    pub fn snapshot(&self) -> HashMap<String, BalanceEntry> {
        self.entries.lock().expect("balance lock poisoned").clone()
    }

    /// Sum of all currently-known balances. Loading and errored entries
    /// contribute their last-known value; untouched addresses contribute zero.
    pub fn total(&self) -> Decimal {
        self.entries
            .lock()
            .expect("balance lock poisoned")
            .values()
            .map(|e| e.balance)
            .sum()
    }
}

/// Options for [`recent_activity`].
#[derive(Debug, Clone)]
pub struct ActivityOptions {
    /// Transactions requested per wallet.
    pub per_wallet_limit: u32,
    /// Size of the merged result.
    pub max_results: usize,
    /// Pause between consecutive wallet fetches.
    pub pause: Duration,
}

impl Default for ActivityOptions {
    fn default() -> Self {
        Self {
            per_wallet_limit: 5,
            max_results: 10,
            pause: Duration::from_millis(500),
        }
    }
}

/// Sequentially fetch recent transactions across `wallets` and merge them.
///
/// Each wallet is awaited before the next begins, with `options.pause`
/// between fetches. Rate limiting halts the loop (the transport has already
/// raised the notification); other per-wallet failures are logged and
/// skipped. Partial results are still returned, sorted by creation time
/// descending and truncated to `options.max_results`.
pub async fn recent_activity(
    client: &WardenClient,
    wallets: &[Wallet],
    options: &ActivityOptions,
) -> Vec<TransactionRecord> {
    let mut merged: Vec<TransactionRecord> = Vec::new();

    for (i, wallet) in wallets.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(options.pause).await;
        }

        match client
            .transaction_history(
                &wallet.address,
                wallet.network,
                Some(options.per_wallet_limit),
            )
            .await
        {
            Ok(txs) => merged.extend(txs),
            Err(WardenError::RateLimited) => {
                debug!(wallet = %wallet.address, "rate limited, halting transaction aggregation");
                break;
            }
            Err(e) => {
                error!(wallet = %wallet.address, error = %e, "failed to load transactions");
            }
        }
    }

    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    merged.truncate(options.max_results);
    merged
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn begin_is_exclusive_per_address() {
        let tracker = BalanceTracker::new();
        assert!(tracker.begin("0xabc"));
        assert!(!tracker.begin("0xabc"));
        // A different address is independent.
        assert!(tracker.begin("0xdef"));
    }

    #[test]
    fn failed_refresh_keeps_last_known_balance() {
        let tracker = BalanceTracker::new();
        tracker.begin("0xabc");
        tracker.complete("0xabc", dec!(1.5), Utc::now());
        tracker.begin("0xabc");
        tracker.fail("0xabc", "boom".into());

        let entry = tracker.entry("0xabc").unwrap();
        assert_eq!(entry.balance, dec!(1.5));
        assert!(!entry.loading);
        assert_eq!(entry.error.as_deref(), Some("boom"));
    }

    #[test]
    fn total_sums_last_known_values() {
        let tracker = BalanceTracker::new();
        tracker.begin("0xaaa");
        tracker.complete("0xaaa", dec!(1.25), Utc::now());
        tracker.begin("0xbbb");
        tracker.complete("0xbbb", dec!(0.75), Utc::now());
        // Errored entry contributes its last-known (zero) balance.
        tracker.begin("0xccc");
        tracker.fail("0xccc", "timeout".into());

        assert_eq!(tracker.total(), dec!(2.00));
    }
}
