use thiserror::Error;

pub type Result<T> = std::result::Result<T, VerifyError>;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Missing required parameter: {name}")]
    MissingParam { name: String },

    #[error("Invalid tile counts (must be comma-separated positive numbers): {0}")]
    InvalidTileCounts(String),

    #[error("Unknown game type: {0}")]
    UnknownGame(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Hash environment unavailable: {0}")]
    Environment(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VerifyError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParam { name: name.into() }
    }

    pub fn tile_counts(msg: impl Into<String>) -> Self {
        Self::InvalidTileCounts(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn environment(msg: impl Into<String>) -> Self {
        Self::Environment(msg.into())
    }

    /// Input errors are raised before any hashing and are fixed by changing
    /// the caller's parameters. Everything else is an environment failure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParam { .. }
                | Self::InvalidTileCounts(_)
                | Self::UnknownGame(_)
                | Self::Input(_)
                | Self::Config(_)
        )
    }
}
