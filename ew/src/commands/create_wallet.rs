use crate::cli::CreateWalletArgs;
use crate::client::{create_app, require_session};
use crate::error::EwError;

pub async fn run(args: CreateWalletArgs) -> Result<(), EwError> {
    let app = create_app()?;
    require_session(&app.session)?;

    let wallet = app.client.create_wallet(args.network).await?;

    println!("Wallet created!");
    println!("  address: {}", wallet.address);
    println!("  network: {}", wallet.network);
    println!("  created: {}", wallet.created_at.to_rfc3339());
    println!();
    println!("View it with `ew dashboard`.");
    Ok(())
}
