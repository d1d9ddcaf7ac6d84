use super::{mismatched_input, parse_common, Game, GameData, GameInput, GameState, StateDetail};
use crate::config::VerifierConfig;
use crate::error::{Result, VerifyError};
use crate::outcome::{roll_dice, DiceRoll};
use crate::params::RawParams;
use crate::state::CanonicalState;

/// Two-dice game. The commitment covers only `version` and `seed`; every roll
/// is addressable on its own, so any roll can be shown without computing the
/// ones before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceGame;

impl DiceGame {
    pub fn roll(&self, seed: &str, roll_index: u64) -> DiceRoll {
        roll_dice(seed, roll_index)
    }

    pub fn rolls(&self, seed: &str, from: u64, count: u64) -> Vec<DiceRoll> {
        (from..from.saturating_add(count))
            .map(|i| roll_dice(seed, i))
            .collect()
    }
}

impl Game for DiceGame {
    fn name(&self) -> &'static str {
        "dice"
    }

    fn display_name(&self) -> &'static str {
        "Degen Dice"
    }

    fn description(&self) -> &'static str {
        "This tool verifies the hash of your game to prove all dice rolls were chosen before the game began."
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["version", "seed", "hash"]
    }

    fn parse_input(&self, params: &RawParams, config: &VerifierConfig) -> Result<GameData> {
        let (version, seed, expected_hash) = parse_common(params, config)?;
        let seed = seed.trim();
        if seed.is_empty() {
            return Err(VerifyError::missing("seed"));
        }
        Ok(GameData {
            version,
            seed: seed.to_string(),
            expected_hash,
            input: GameInput::Dice,
        })
    }

    fn reconstruct_state(&self, data: &GameData) -> Result<GameState> {
        if data.input != GameInput::Dice {
            return Err(mismatched_input(self.name()));
        }

        let first_roll = self.roll(&data.seed, 0);
        Ok(GameState {
            canonical: CanonicalState::without_rows(&data.version, &data.seed),
            detail: StateDetail::Dice {
                roll_index: 0,
                first_roll,
            },
        })
    }
}
