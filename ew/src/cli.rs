use clap::{Parser, Subcommand};
use warden::Network;

/// ew — command-line client for the warden custodial wallet service.
#[derive(Parser, Debug)]
#[command(name = "ew", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Omitted subcommand opens the dashboard.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account and start a session
    Register(RegisterArgs),

    /// Sign in to an existing account
    Login(LoginArgs),

    /// Clear the stored session
    Logout,

    /// Launch the wallet dashboard TUI
    Dashboard,

    /// Create a new server-side wallet
    CreateWallet(CreateWalletArgs),

    /// Send funds from one of your wallets
    Send(SendArgs),

    /// Show transaction history for a wallet
    History(HistoryArgs),
}

/// Arguments for the `register` subcommand.
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password (at least 6 characters)
    #[arg(long)]
    pub password: String,

    /// Password confirmation; must match `--password`
    #[arg(long)]
    pub confirm_password: String,
}

/// Arguments for the `login` subcommand.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

/// Arguments for the `create-wallet` subcommand.
#[derive(Parser, Debug)]
pub struct CreateWalletArgs {
    /// Network to create the wallet on (testnet, mainnet)
    #[arg(long, default_value = "testnet")]
    pub network: Network,
}

/// Arguments for the `send` subcommand.
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// Address of the sending wallet (one of yours)
    #[arg(long)]
    pub from: String,

    /// Recipient address
    #[arg(long)]
    pub to: String,

    /// Amount in ETH (e.g. 0.01)
    #[arg(long)]
    pub amount: String,

    /// Network to send on (testnet, mainnet)
    #[arg(long, default_value = "testnet")]
    pub network: Network,
}

/// Arguments for the `history` subcommand.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Wallet address to inspect
    pub address: String,

    /// Network the wallet lives on (testnet, mainnet)
    #[arg(long, default_value = "testnet")]
    pub network: Network,

    /// Maximum number of transactions to fetch
    #[arg(long, default_value = "10")]
    pub limit: u32,
}
