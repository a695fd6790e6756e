//! Client factory — wires config, session store, and notifier together.

use std::path::PathBuf;

use warden::{Notifier, SessionStore, WardenClient, WardenConfig};

use crate::error::EwError;

/// Environment variable overriding the session file location.
const SESSION_FILE_ENV: &str = "EW_SESSION_FILE";

/// Fully wired client stack for one command invocation.
pub struct App {
    pub client: WardenClient,
    pub session: SessionStore,
    pub notifier: Notifier,
}

/// Session file location: `$EW_SESSION_FILE` or `~/.config/ew/session.json`.
pub fn session_path() -> PathBuf {
    if let Ok(path) = std::env::var(SESSION_FILE_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home)
        .join(".config")
        .join("ew")
        .join("session.json")
}

/// Build the client stack: endpoint from the environment, restored session,
/// and a notifier handle injected into the transport.
pub fn create_app() -> Result<App, EwError> {
    let config = WardenConfig::from_env()?;
    let session = SessionStore::open(session_path());
    let notifier = Notifier::new();
    let client = WardenClient::new(&config, session.clone(), notifier.clone());
    Ok(App {
        client,
        session,
        notifier,
    })
}

/// Route guard: commands behind authentication refuse to run logged out.
pub fn require_session(session: &SessionStore) -> Result<(), EwError> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(EwError::NotLoggedIn)
    }
}
