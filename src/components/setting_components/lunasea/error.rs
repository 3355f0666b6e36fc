use thiserror::Error;

use super::messages;

/// Everything that can go wrong while configuring the LunaSea agent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The access token is blank. Caught locally, never sent to the server.
    #[error("{}", messages::ACCESS_TOKEN_REQUIRED)]
    MissingAccessToken,

    /// The initial read failed; the form cannot be shown.
    #[error("Failed to load LunaSea notification settings: {0}")]
    LoadFailure(String),

    #[error("LunaSea notification settings failed to save: {0}")]
    SaveFailure(String),

    #[error("LunaSea test notification failed to send: {0}")]
    TestFailure(String),
}
