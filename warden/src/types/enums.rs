use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Blockchain network a wallet lives on.
///
/// The wire form is uppercase (`TESTNET`/`MAINNET`); user-facing input is
/// accepted case-insensitively and displayed lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Testnet,
    Mainnet,
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Testnet => write!(f, "testnet"),
            Network::Mainnet => write!(f, "mainnet"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            other => Err(format!("unknown network: {other} (expected testnet or mainnet)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_is_uppercase() {
        assert_eq!(serde_json::to_string(&Network::Testnet).unwrap(), "\"TESTNET\"");
        let n: Network = serde_json::from_str("\"MAINNET\"").unwrap();
        assert_eq!(n, Network::Mainnet);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("MAINNET".parse::<Network>().unwrap(), Network::Mainnet);
        assert!("devnet".parse::<Network>().is_err());
    }
}
