use std::str::FromStr;

use rust_decimal::Decimal;

use crate::cli::SendArgs;
use crate::client::{create_app, require_session};
use crate::error::EwError;

pub async fn run(args: SendArgs) -> Result<(), EwError> {
    validate(&args)?;

    let app = create_app()?;
    require_session(&app.session)?;

    let receipt = app
        .client
        .send_funds(&args.to, &args.amount, args.network, &args.from)
        .await?;

    println!("Transaction submitted successfully!");
    println!("  hash:    {}", receipt.transaction_hash);
    println!("  status:  {}", receipt.status);
    println!("  amount:  {} ETH", receipt.amount_in_ether);
    println!("  from:    {}", receipt.from);
    println!("  to:      {}", receipt.to);
    println!("  network: {}", receipt.network);
    Ok(())
}

fn validate(args: &SendArgs) -> Result<(), EwError> {
    super::require_non_empty("from wallet", &args.from)?;
    super::require_non_empty("recipient address", &args.to)?;
    super::require_non_empty("amount", &args.amount)?;

    let amount = Decimal::from_str(args.amount.trim())
        .map_err(|_| EwError::Validation(format!("invalid amount: {}", args.amount)))?;
    if amount <= Decimal::ZERO {
        return Err(EwError::Validation("amount must be positive".into()));
    }
    Ok(())
}
