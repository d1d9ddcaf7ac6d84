use super::{mismatched_input, parse_common, Game, GameData, GameInput, GameState, StateDetail};
use crate::config::VerifierConfig;
use crate::error::Result;
use crate::params::RawParams;
use crate::state::{CanonicalState, Row, TileCounts};
use serde::Serialize;

/// Tile-elimination game: one death tile per row, cumulative multiplier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileGame;

/// One row prepared for display, top row first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRowView {
    /// 1 for the first row played.
    pub label: usize,
    pub tiles: u32,
    pub death_tile_index: u32,
    pub multiplier: f64,
    pub selected_tile: Option<u32>,
}

impl TileRowView {
    pub fn survived(&self) -> Option<bool> {
        self.selected_tile.map(|t| t != self.death_tile_index)
    }
}

/// Rows in display order (last played on top) with the player's picks.
pub fn row_views(rows: &[Row], selected_tiles: &[u32]) -> Vec<TileRowView> {
    rows.iter()
        .enumerate()
        .rev()
        .map(|(i, row)| TileRowView {
            label: i + 1,
            tiles: row.tiles(),
            death_tile_index: row.death_tile_index(),
            multiplier: row.multiplier(),
            selected_tile: selected_tiles.get(i).copied(),
        })
        .collect()
}

/// Comma-separated tile indices. Entries that do not parse are dropped.
fn parse_selected_tiles(raw: Option<&str>) -> Vec<u32> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(',')
        .filter_map(|part| {
            let part = part.trim();
            match part.parse::<u32>() {
                Ok(tile) => Some(tile),
                Err(_) => {
                    tracing::debug!("Skipping malformed selected tile '{}'", part);
                    None
                }
            }
        })
        .collect()
}

impl Game for TileGame {
    fn name(&self) -> &'static str {
        "deathFun"
    }

    fn display_name(&self) -> &'static str {
        "Death Fun"
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["version", "rows", "seed", "hash"]
    }

    fn optional_inputs(&self) -> &'static [&'static str] {
        &["selectedTiles"]
    }

    fn parse_input(&self, params: &RawParams, config: &VerifierConfig) -> Result<GameData> {
        let rows = params.require("rows")?;
        let (version, seed, expected_hash) = parse_common(params, config)?;
        let tile_counts: TileCounts = rows.parse()?;
        let selected_tiles = parse_selected_tiles(params.get("selectedTiles"));

        Ok(GameData {
            version,
            seed,
            expected_hash,
            input: GameInput::Tiles {
                tile_counts,
                selected_tiles,
            },
        })
    }

    fn reconstruct_state(&self, data: &GameData) -> Result<GameState> {
        let GameInput::Tiles {
            tile_counts,
            selected_tiles,
        } = &data.input
        else {
            return Err(mismatched_input(self.name()));
        };

        Ok(GameState {
            canonical: CanonicalState::tiles(&data.version, &data.seed, tile_counts),
            detail: StateDetail::Tiles {
                selected_tiles: selected_tiles.clone(),
            },
        })
    }
}
