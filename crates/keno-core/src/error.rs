//! Play rejections and configuration errors

use thiserror::Error;

/// Why a round could not be started or finished.
///
/// The message is meant to be shown to the player as-is. A rejection never
/// changes engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayRejection {
    #[error("Select a game mode first")]
    NoMode,

    #[error("Select the number of drawings first")]
    NoDrawings,

    #[error("Select {remaining} more number(s) to play")]
    IncompleteSelection { remaining: usize },

    #[error("A round is already being drawn")]
    RoundInProgress,

    #[error("No round is being drawn")]
    NotDrawing,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Cannot change config while a game is in progress")]
    GameInProgress,
}
