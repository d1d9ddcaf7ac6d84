//! The game contract and its built-in implementations.
//!
//! The verification engine only talks to [`Game`]; adding a game means adding
//! an implementation and registering it, never touching the engine.

pub mod dice;
pub mod laser;
pub mod tiles;

pub use dice::DiceGame;
pub use laser::{grid_steps, GridCell, GridStep, LaserPartyGame};
pub use tiles::{TileGame, TileRowView};

use crate::commitment::{self, CommitmentFormat};
use crate::config::VerifierConfig;
use crate::error::{Result, VerifyError};
use crate::outcome::DiceRoll;
use crate::params::RawParams;
use crate::state::{CanonicalState, TileCounts};
use serde::Serialize;

pub const DEFAULT_DESCRIPTION: &str =
    "This tool verifies the hash of your game to prove the outcome was chosen before the game began.";

/// Inputs after validation. Nothing here has been hashed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct GameData {
    pub version: String,
    pub seed: String,
    /// Trimmed and lowercased.
    pub expected_hash: String,
    pub input: GameInput,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameInput {
    Dice,
    Tiles {
        tile_counts: TileCounts,
        selected_tiles: Vec<u32>,
    },
    Grid {
        tile_counts: TileCounts,
        selected_tiles: Vec<GridCell>,
    },
}

/// Reconstructed state: the hashed canonical part plus display-only detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub canonical: CanonicalState,
    pub detail: StateDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StateDetail {
    #[serde(rename_all = "camelCase")]
    Dice { roll_index: u64, first_roll: DiceRoll },
    #[serde(rename_all = "camelCase")]
    Tiles { selected_tiles: Vec<u32> },
    #[serde(rename_all = "camelCase")]
    Grid {
        selected_tiles: Vec<GridCell>,
        steps: Vec<GridStep>,
    },
}

pub trait Game: Send + Sync {
    /// Registry key.
    fn name(&self) -> &'static str;

    fn display_name(&self) -> &'static str {
        self.name()
    }

    fn description(&self) -> &'static str {
        DEFAULT_DESCRIPTION
    }

    fn required_inputs(&self) -> &'static [&'static str];

    fn optional_inputs(&self) -> &'static [&'static str] {
        &[]
    }

    fn parse_input(&self, params: &RawParams, config: &VerifierConfig) -> Result<GameData>;

    fn reconstruct_state(&self, data: &GameData) -> Result<GameState>;

    fn commitment_hash(&self, state: &CanonicalState, format: CommitmentFormat) -> Result<String> {
        commitment::commitment_hash(state, format)
    }
}

/// `version`, `seed` and `hash` handling shared by every game. `version` and
/// `seed` are hashed, so they are returned exactly as given.
pub(crate) fn parse_common(
    params: &RawParams,
    config: &VerifierConfig,
) -> Result<(String, String, String)> {
    let version = params
        .get("version")
        .unwrap_or(config.default_version.as_str())
        .to_string();

    let seed = params.require("seed")?;

    let expected_hash = params.require("hash")?.trim().to_lowercase();
    if expected_hash.is_empty() {
        return Err(VerifyError::missing("hash"));
    }

    Ok((version, seed.to_string(), expected_hash))
}

pub(crate) fn mismatched_input(game: &str) -> VerifyError {
    VerifyError::input(format!("Game data was not parsed by the {} game", game))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_defaults_and_normalizes() {
        let params = RawParams::new()
            .with("seed", "  padded  ")
            .with("hash", " 0xABCdef ");
        let (version, seed, hash) = parse_common(&params, &VerifierConfig::default()).unwrap();
        assert_eq!(version, "v1");
        assert_eq!(seed, "  padded  ");
        assert_eq!(hash, "0xabcdef");

        let padded_version = params.with("version", " v2 ");
        let (version, _, _) = parse_common(&padded_version, &VerifierConfig::default()).unwrap();
        assert_eq!(version, " v2 ");
    }

    #[test]
    fn test_parse_common_requires_seed_and_hash() {
        let config = VerifierConfig::default();
        let only_hash = RawParams::new().with("hash", "0x1");
        assert!(matches!(
            parse_common(&only_hash, &config),
            Err(VerifyError::MissingParam { name }) if name == "seed"
        ));
        let empty_seed = RawParams::new().with("seed", "").with("hash", "0x1");
        assert!(parse_common(&empty_seed, &config).is_err());
        let blank_seed = RawParams::new().with("seed", "   ").with("hash", "0x1");
        assert!(parse_common(&blank_seed, &config).is_ok());
        let only_seed = RawParams::new().with("seed", "s");
        assert!(matches!(
            parse_common(&only_seed, &config),
            Err(VerifyError::MissingParam { name }) if name == "hash"
        ));
    }
}
