use tracing::info;

use crate::cli::LoginArgs;
use crate::client::create_app;
use crate::error::EwError;

pub async fn run(args: LoginArgs) -> Result<(), EwError> {
    super::require_non_empty("email", &args.email)?;
    super::require_non_empty("password", &args.password)?;

    let app = create_app()?;
    let auth = app.client.login(&args.email, &args.password).await?;
    app.session.login(&auth.token, auth.user.clone())?;

    info!(email = %auth.user.email, "logged in");
    println!("Logged in as {}.", auth.user.email);
    println!("Run `ew dashboard` to view your wallets.");
    Ok(())
}
