use thiserror::Error;

#[derive(Debug, Error)]
pub enum EwError {
    #[error(transparent)]
    Warden(#[from] warden::WardenError),

    #[error("not logged in. Run `ew login` first")]
    NotLoggedIn,

    #[error("{0}")]
    Validation(String),

    // Command failure with a message meant for the user as-is.
    #[error("{0}")]
    Failed(String),

    #[error("terminal error: {0}")]
    Terminal(String),
}
