use crate::commitment::{self, CommitmentFormat};
use crate::config::VerifierConfig;
use crate::error::{Result, VerifyError};
use crate::game::GameState;
use crate::params::RawParams;
use crate::registry::GameRegistry;
use serde::Serialize;

pub const MATCH_MESSAGE: &str = "Hash matches!";
pub const MISMATCH_MESSAGE: &str = "Hash does not match!";

/// Everything a renderer needs after one verification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub game: String,
    pub display_name: String,
    pub matches: bool,
    pub message: String,
    pub computed_hash: String,
    pub expected_hash: String,
    pub format: CommitmentFormat,
    pub state: GameState,
}

/// Game-agnostic verification engine.
#[derive(Debug, Clone)]
pub struct Verifier {
    registry: GameRegistry,
    config: VerifierConfig,
}

impl Verifier {
    pub fn new(registry: GameRegistry, config: VerifierConfig) -> Result<Self> {
        config.validate()?;
        if !registry.contains(&config.default_game) {
            return Err(VerifyError::config(format!(
                "Default game '{}' is not registered",
                config.default_game
            )));
        }
        Ok(Self { registry, config })
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verifies `params` against the named game, or the configured default.
    ///
    /// Input is validated before any hashing starts. Reconstruction and
    /// hashing run on the blocking pool and are awaited.
    pub async fn verify(&self, game: Option<&str>, params: &RawParams) -> Result<VerificationReport> {
        self.verify_with_format(game, params, self.config.format).await
    }

    pub async fn verify_with_format(
        &self,
        game: Option<&str>,
        params: &RawParams,
        format: CommitmentFormat,
    ) -> Result<VerificationReport> {
        let name = game.unwrap_or(self.config.default_game.as_str());
        let game = self.registry.get(name)?;
        let data = game.parse_input(params, &self.config)?;
        let expected_hash = data.expected_hash.clone();

        tracing::debug!(
            game = game.name(),
            version = %data.version,
            %format,
            "Reconstructing game state"
        );

        let worker = game.clone();
        let (state, computed_hash) = tokio::task::spawn_blocking(move || {
            let state = worker.reconstruct_state(&data)?;
            let hash = worker.commitment_hash(&state.canonical, format)?;
            Ok::<_, VerifyError>((state, hash))
        })
        .await
        .map_err(|e| VerifyError::environment(format!("Verification task failed: {}", e)))??;

        let verification = commitment::compare(computed_hash, &expected_hash);
        let message = if verification.matches {
            tracing::info!(game = game.name(), hash = %verification.computed_hash, "Hash matches");
            MATCH_MESSAGE
        } else {
            tracing::warn!(
                game = game.name(),
                expected = %verification.expected_hash,
                computed = %verification.computed_hash,
                "Hash does not match"
            );
            MISMATCH_MESSAGE
        };

        Ok(VerificationReport {
            game: game.name().to_string(),
            display_name: game.display_name().to_string(),
            matches: verification.matches,
            message: message.to_string(),
            computed_hash: verification.computed_hash,
            expected_hash: verification.expected_hash,
            format,
            state,
        })
    }
}
