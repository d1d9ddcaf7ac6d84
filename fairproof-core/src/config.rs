use crate::commitment::CommitmentFormat;
use crate::error::{Result, VerifyError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Game used when the caller does not name one.
    pub default_game: String,
    /// Hashed `version` value when the input omits it.
    pub default_version: String,
    pub format: CommitmentFormat,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            default_game: "deathFun".to_string(),
            default_version: "v1".to_string(),
            format: CommitmentFormat::Standard,
        }
    }
}

impl VerifierConfig {
    pub fn with_format(mut self, format: CommitmentFormat) -> Self {
        self.format = format;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_game.trim().is_empty() {
            return Err(VerifyError::config("Default game cannot be empty"));
        }

        if self.default_version.trim().is_empty() {
            return Err(VerifyError::config("Default version cannot be empty"));
        }

        Ok(())
    }
}
