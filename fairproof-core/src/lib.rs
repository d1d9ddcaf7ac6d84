//! fairproof - provably fair game verification
//!
//! Recomputes a game's outcomes from a revealed seed and checks that hashing
//! the reconstructed state reproduces the commitment published before play.
//! Supports a two-dice game, a tile-elimination game and a grid-elimination
//! game behind one [`Game`] contract.

pub mod commitment;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod hash;
pub mod outcome;
pub mod params;
pub mod registry;
pub mod state;

pub use commitment::{CommitmentFormat, Verification};
pub use config::VerifierConfig;
pub use engine::{VerificationReport, Verifier};
pub use error::{Result, VerifyError};
pub use game::{DiceGame, Game, GameData, GameInput, GameState, LaserPartyGame, StateDetail, TileGame};
pub use outcome::{DiceRoll, Dimension, HOUSE_EDGE};
pub use params::RawParams;
pub use registry::GameRegistry;
pub use state::{CanonicalState, GridRow, Row, TileCounts, TileRow};

/// Verify with the built-in games and default configuration.
pub async fn verify(game: &str, params: &RawParams) -> Result<VerificationReport> {
    let verifier = Verifier::new(GameRegistry::with_builtin_games(), VerifierConfig::default())?;
    verifier.verify(Some(game), params).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verify_dice() {
        let params = RawParams::from_query(
            "version=v1&seed=abc&hash=0x4e38c41a0e94fe4f43051a93c7f34d9776ee5eb3c76832aa58b3f82698224e84",
        );
        let report = verify("dice", &params).await.unwrap();
        assert!(report.matches);
        assert_eq!(report.display_name, "Degen Dice");
    }
}
