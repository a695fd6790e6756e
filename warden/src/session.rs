//! Persisted bearer-token session.
//!
//! One canonical JSON file holds `{token, user, expires_at}` with a 7-day
//! expiry stamped at login. A legacy on-disk pair (`auth_token` + `auth_user`)
//! from older releases is read once, migrated, and deleted. Corrupt or
//! expired state is never retained: restore discards it and clears the files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, WardenError};
use crate::types::UserInfo;

/// Sessions persist for 7 days from login.
const SESSION_TTL_DAYS: i64 = 7;

/// Legacy persisted entries, kept as a one-time migration read path.
const LEGACY_TOKEN_FILE: &str = "auth_token";
const LEGACY_USER_FILE: &str = "auth_user";

/// An authenticated session: bearer token plus user identity.
///
/// Invariant: a stored session always has both; "token without user" (or the
/// reverse) cannot be represented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
    pub expires_at: DateTime<Utc>,
}

/// Session state shared between the transport and the UI.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    state: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Open the store at `path`, restoring any persisted session.
    ///
    /// Restore is fail-safe: unparseable or expired state yields an
    /// unauthenticated store and removes the offending files. A second open
    /// against the same path behaves identically.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = restore(&path);
        Self {
            path,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Store a fresh session in memory and on disk with a 7-day expiry.
    pub fn login(&self, token: impl Into<String>, user: UserInfo) -> Result<()> {
        let session = Session {
            token: token.into(),
            user,
            expires_at: Utc::now() + Duration::days(SESSION_TTL_DAYS),
        };
        persist(&self.path, &session)?;
        *self.state.write().expect("session lock poisoned") = Some(session);
        Ok(())
    }

    /// Clear the session from memory and remove all persisted entries,
    /// legacy ones included.
    pub fn logout(&self) {
        *self.state.write().expect("session lock poisoned") = None;
        remove_persisted(&self.path);
    }

    /// Bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Current user, if authenticated.
    pub fn user(&self) -> Option<UserInfo> {
        self.state
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.user.clone())
    }

    /// True iff both token and user are present.
    pub fn is_authenticated(&self) -> bool {
        self.state.read().expect("session lock poisoned").is_some()
    }

    /// Path of the canonical session file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Restore a session from disk, trying the canonical file first and the
/// legacy pair second.
fn restore(path: &Path) -> Option<Session> {
    if path.exists() {
        return match read_canonical(path) {
            Some(session) => Some(session),
            None => {
                remove_persisted(path);
                None
            }
        };
    }
    migrate_legacy(path)
}

fn read_canonical(path: &Path) -> Option<Session> {
    let raw = fs::read_to_string(path).ok()?;
    let session: Session = match serde_json::from_str(&raw) {
        Ok(s) => s,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "discarding unparseable session");
            return None;
        }
    };
    if session.expires_at <= Utc::now() {
        debug!("persisted session expired, discarding");
        return None;
    }
    Some(session)
}

/// One-time migration from the legacy `auth_token` / `auth_user` pair.
fn migrate_legacy(path: &Path) -> Option<Session> {
    let dir = path.parent()?;
    let token_path = dir.join(LEGACY_TOKEN_FILE);
    let user_path = dir.join(LEGACY_USER_FILE);
    if !token_path.exists() {
        return None;
    }

    let token = fs::read_to_string(&token_path).ok()?;
    let token = token.trim().to_string();
    let user: Option<UserInfo> = fs::read_to_string(&user_path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok());

    let Some(user) = user else {
        // Partial or corrupt legacy state is never retained.
        warn!("legacy session entries corrupt, clearing");
        let _ = fs::remove_file(&token_path);
        let _ = fs::remove_file(&user_path);
        return None;
    };

    let session = Session {
        token,
        user,
        expires_at: Utc::now() + Duration::days(SESSION_TTL_DAYS),
    };
    if let Err(e) = persist(path, &session) {
        warn!(error = %e, "failed to migrate legacy session");
    }
    let _ = fs::remove_file(&token_path);
    let _ = fs::remove_file(&user_path);
    debug!("migrated legacy session entries");
    Some(session)
}

fn persist(path: &Path, session: &Session) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| WardenError::Session(format!("cannot create {}: {e}", dir.display())))?;
    }
    let raw = serde_json::to_string_pretty(session)?;
    fs::write(path, raw)
        .map_err(|e| WardenError::Session(format!("cannot write {}: {e}", path.display())))?;

    // The file holds a bearer token; keep it private.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    Ok(())
}

fn remove_persisted(path: &Path) {
    let _ = fs::remove_file(path);
    if let Some(dir) = path.parent() {
        let _ = fs::remove_file(dir.join(LEGACY_TOKEN_FILE));
        let _ = fs::remove_file(dir.join(LEGACY_USER_FILE));
    }
}
