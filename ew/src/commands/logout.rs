use warden::SessionStore;

use crate::client::session_path;
use crate::error::EwError;

/// Clears the persisted session. Works without a configured endpoint.
pub fn run() -> Result<(), EwError> {
    let session = SessionStore::open(session_path());
    session.logout();
    println!("Logged out.");
    Ok(())
}
