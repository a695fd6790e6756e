use chrono::Utc;

use crate::cli::HistoryArgs;
use crate::client::{create_app, require_session};
use crate::error::EwError;
use crate::format::{relative_age, short_address};

pub async fn run(args: HistoryArgs) -> Result<(), EwError> {
    super::require_non_empty("address", &args.address)?;

    let app = create_app()?;
    require_session(&app.session)?;

    let txs = app
        .client
        .transaction_history(&args.address, args.network, Some(args.limit))
        .await?;

    if txs.is_empty() {
        println!(
            "No transactions found for {} on {}.",
            short_address(&args.address),
            args.network
        );
        return Ok(());
    }

    let now = Utc::now();
    println!(
        "{:<12} {:<28} {:>16} {:<10} HASH",
        "AGE", "FROM -> TO", "AMOUNT (ETH)", "STATUS"
    );
    for tx in &txs {
        println!(
            "{:<12} {:<28} {:>16} {:<10} {}",
            relative_age(tx.created_at, now),
            format!("{} -> {}", short_address(&tx.from), short_address(&tx.to)),
            tx.amount_in_ether.round_dp(6),
            tx.status,
            tx.transaction_hash,
        );
    }
    Ok(())
}
