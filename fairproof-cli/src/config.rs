use anyhow::Context;
use fairproof_core::VerifierConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub verbose: bool,
    pub verifier: VerifierConfig,
}

impl CliConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fairproof")
            .join("config.json")
    }

    /// An explicit path must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: CliConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.verifier.validate()?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairproof_core::CommitmentFormat;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"verbose":true,"verifier":{"default_game":"dice","format":"omit-empty-rows"}}"#,
        )
        .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert!(config.verbose);
        assert_eq!(config.verifier.default_game, "dice");
        assert_eq!(config.verifier.default_version, "v1");
        assert_eq!(config.verifier.format, CommitmentFormat::OmitEmptyRows);
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let dir = tempdir().unwrap();
        assert!(CliConfig::load(Some(&dir.path().join("nope.json"))).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"verifier":{"default_version":""}}"#).unwrap();
        assert!(CliConfig::load(Some(&path)).is_err());
    }
}
