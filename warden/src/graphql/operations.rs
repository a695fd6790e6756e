use serde_json::json;

use crate::error::Result;
use crate::graphql::WardenClient;
use crate::types::*;

const REGISTER_MUTATION: &str = "\
mutation Register($email: String!, $password: String!) {
  register(email: $email, password: $password) {
    token
    user { id email }
  }
}";

const LOGIN_MUTATION: &str = "\
mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    token
    user { id email }
  }
}";

const ME_QUERY: &str = "\
query Me {
  me {
    id
    email
    wallets { id address network createdAt }
  }
}";

const CREATE_WALLET_MUTATION: &str = "\
mutation CreateWallet($network: Network!) {
  createWallet(network: $network) {
    id
    address
    network
    createdAt
  }
}";

const BALANCE_QUERY: &str = "\
query Balance($address: String!, $network: Network!) {
  balance(address: $address, network: $network) {
    address
    balance
    balanceInWei
    network
    lastUpdated
  }
}";

const SEND_FUNDS_MUTATION: &str = "\
mutation SendFunds($to: String!, $amount: String!, $network: Network!, $walletAddress: String!) {
  sendFunds(to: $to, amount: $amount, network: $network, walletAddress: $walletAddress) {
    transactionHash
    from
    to
    amount
    amountInEther
    status
    network
  }
}";

const TRANSACTION_HISTORY_QUERY: &str = "\
query TransactionHistory($address: String!, $network: Network!, $limit: Int) {
  transactionHistory(address: $address, network: $network, limit: $limit) {
    id
    transactionHash
    from
    to
    amount
    amountInEther
    status
    network
    blockNumber
    gasUsed
    gasPrice
    createdAt
  }
}";

impl WardenClient {
    /// `register` mutation - create an account, returning its first session.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthPayload> {
        self.execute(
            "Register",
            REGISTER_MUTATION,
            json!({ "email": email, "password": password }),
            "register",
        )
        .await
    }

    /// `login` mutation - authenticate an existing account.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload> {
        self.execute(
            "Login",
            LOGIN_MUTATION,
            json!({ "email": email, "password": password }),
            "login",
        )
        .await
    }

    /// `me` query - current user and their wallets.
    pub async fn me(&self) -> Result<Me> {
        self.execute("Me", ME_QUERY, json!({}), "me").await
    }

    /// `createWallet` mutation - provision a new server-side wallet.
    pub async fn create_wallet(&self, network: Network) -> Result<Wallet> {
        self.execute(
            "CreateWallet",
            CREATE_WALLET_MUTATION,
            json!({ "network": network }),
            "createWallet",
        )
        .await
    }

    /// `balance` query - fresh on-chain balance for an address.
    pub async fn balance(&self, address: &str, network: Network) -> Result<BalanceInfo> {
        self.execute(
            "Balance",
            BALANCE_QUERY,
            json!({ "address": address, "network": network }),
            "balance",
        )
        .await
    }

    /// `sendFunds` mutation - submit a transfer from one of the user's wallets.
    pub async fn send_funds(
        &self,
        to: &str,
        amount: &str,
        network: Network,
        wallet_address: &str,
    ) -> Result<TransferReceipt> {
        self.execute(
            "SendFunds",
            SEND_FUNDS_MUTATION,
            json!({
                "to": to,
                "amount": amount,
                "network": network,
                "walletAddress": wallet_address,
            }),
            "sendFunds",
        )
        .await
    }

    /// `transactionHistory` query - most recent transactions for an address.
    pub async fn transaction_history(
        &self,
        address: &str,
        network: Network,
        limit: Option<u32>,
    ) -> Result<Vec<TransactionRecord>> {
        self.execute(
            "TransactionHistory",
            TRANSACTION_HISTORY_QUERY,
            json!({ "address": address, "network": network, "limit": limit }),
            "transactionHistory",
        )
        .await
    }
}
