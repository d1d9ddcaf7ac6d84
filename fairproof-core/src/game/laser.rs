use super::{mismatched_input, parse_common, Game, GameData, GameInput, GameState, StateDetail};
use crate::config::VerifierConfig;
use crate::error::Result;
use crate::outcome::Dimension;
use crate::params::RawParams;
use crate::state::{CanonicalState, Row, TileCounts};
use serde::Serialize;

/// Grid-elimination game. Rows alternate between removing a column and
/// removing a row of one shared square grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaserPartyGame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

/// Grid size before an elimination, with the line about to be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStep {
    pub grid_rows: u32,
    pub grid_cols: u32,
    /// `None` on the final step, after every line is gone.
    pub death_line: Option<(Dimension, u32)>,
    pub selected: Option<GridCell>,
    /// The player's tile lies on the death line.
    pub hit: bool,
}

impl GridStep {
    pub fn is_death_cell(&self, cell: GridCell) -> bool {
        match self.death_line {
            Some((Dimension::Row, idx)) => cell.row == idx,
            Some((Dimension::Col, idx)) => cell.col == idx,
            None => false,
        }
    }
}

/// `rows.len() + 1` grid states: the initial square of side `max(tiles)`,
/// then one per elimination.
pub fn grid_steps(rows: &[Row], selected_tiles: &[GridCell]) -> Vec<GridStep> {
    let side = rows.iter().map(Row::tiles).max().unwrap_or(0);
    let (mut grid_rows, mut grid_cols) = (side, side);
    let mut steps = Vec::with_capacity(rows.len() + 1);

    for (i, row) in rows.iter().enumerate() {
        let dimension = match row {
            Row::Grid(g) => g.dimension,
            Row::Tile(_) => Dimension::for_row(i),
        };
        let mut step = GridStep {
            grid_rows,
            grid_cols,
            death_line: Some((dimension, row.death_tile_index())),
            selected: selected_tiles.get(i).copied(),
            hit: false,
        };
        step.hit = step.selected.is_some_and(|cell| step.is_death_cell(cell));
        steps.push(step);

        match dimension {
            Dimension::Col => grid_cols = grid_cols.saturating_sub(1),
            Dimension::Row => grid_rows = grid_rows.saturating_sub(1),
        }
    }

    steps.push(GridStep {
        grid_rows,
        grid_cols,
        death_line: None,
        selected: None,
        hit: false,
    });
    steps
}

/// `row,col` pairs separated by `;`. Pairs that do not parse are dropped.
fn parse_selected_cells(raw: Option<&str>) -> Vec<GridCell> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(';')
        .filter_map(|pair| {
            let coords: Vec<&str> = pair.split(',').map(str::trim).collect();
            match coords.as_slice() {
                [row, col] => Some(GridCell {
                    row: row.parse().ok()?,
                    col: col.parse().ok()?,
                }),
                _ => {
                    tracing::debug!("Skipping malformed selected tile '{}'", pair);
                    None
                }
            }
        })
        .collect()
}

impl Game for LaserPartyGame {
    fn name(&self) -> &'static str {
        "laser_party"
    }

    fn display_name(&self) -> &'static str {
        "Laser Party"
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

        Ok(GameData {
            version,
            seed,
            expected_hash,
            input: GameInput::Grid {
                tile_counts,
                selected_tiles: parse_selected_cells(params.get("selectedTiles")),
            },
        })
    }

    fn reconstruct_state(&self, data: &GameData) -> Result<GameState> {
        let GameInput::Grid {
            tile_counts,
            selected_tiles,
        } = &data.input
        else {
            return Err(mismatched_input(self.name()));
        };

        let canonical = CanonicalState::grid(&data.version, &data.seed, tile_counts);
        let steps = grid_steps(canonical.rows(), selected_tiles);
        Ok(GameState {
            canonical,
            detail: StateDetail::Grid {
                selected_tiles: selected_tiles.clone(),
                steps,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commitment::CommitmentFormat;

    const GRID_HASH: &str = "0xafd87f4d55225f1aa1dc3c5e0a4df1161536e7f1a6c2c7a968e7936f5fbd686b";

    fn params() -> RawParams {
        RawParams::new()
            .with("rows", "5,5,4,4")
            .with("seed", "grid-seed")
            .with("hash", GRID_HASH)
    }

    #[test]
    fn test_laser_party_known_commitment() {
        let game = LaserPartyGame;
        let data = game.parse_input(&params(), &VerifierConfig::default()).unwrap();
        let state = game.reconstruct_state(&data).unwrap();
        assert_eq!(
            game.commitment_hash(&state.canonical, CommitmentFormat::Standard)
                .unwrap(),
            GRID_HASH
        );
    }

    #[test]
    fn test_padded_seed_is_hashed_verbatim() {
        let p = params()
            .with("seed", "  grid-seed ")
            .with("hash", "0xe12fb350ddb3f31db153acd38fde1e6ca00df7e9f1673f2856792e9387204364");
        let data = LaserPartyGame.parse_input(&p, &VerifierConfig::default()).unwrap();
        assert_eq!(data.seed, "  grid-seed ");
        let state = LaserPartyGame.reconstruct_state(&data).unwrap();
        assert_eq!(
            LaserPartyGame
                .commitment_hash(&state.canonical, CommitmentFormat::Standard)
                .unwrap(),
            "0xe12fb350ddb3f31db153acd38fde1e6ca00df7e9f1673f2856792e9387204364"
        );
    }

    #[test]
    fn test_selected_cells_parsing() {
        let cells = parse_selected_cells(Some("1,3; 4 ,0;bad;2,x;7"));
        assert_eq!(
            cells,
            vec![GridCell { row: 1, col: 3 }, GridCell { row: 4, col: 0 }]
        );
        assert!(parse_selected_cells(None).is_empty());
    }

    #[test]
    fn test_grid_progression() {
        let p = params().with("selectedTiles", "0,3;4,4;2,2");
        let data = LaserPartyGame.parse_input(&p, &VerifierConfig::default()).unwrap();
        let state = LaserPartyGame.reconstruct_state(&data).unwrap();
        let StateDetail::Grid { steps, .. } = state.detail else {
            panic!("expected grid detail");
        };

        let sizes: Vec<(u32, u32)> = steps.iter().map(|s| (s.grid_rows, s.grid_cols)).collect();
        assert_eq!(sizes, vec![(5, 5), (5, 4), (4, 4), (4, 3), (3, 3)]);

        // col 3, row 4, col 1, row 1
        assert!(steps[0].hit);
        assert!(steps[1].hit);
        assert!(!steps[2].hit);
        assert_eq!(steps[3].selected, None);
        assert_eq!(steps[4].death_line, None);
    }

    #[test]
    fn test_death_cell() {
        let step = GridStep {
            grid_rows: 3,
            grid_cols: 3,
            death_line: Some((Dimension::Row, 2)),
            selected: None,
            hit: false,
        };
        assert!(step.is_death_cell(GridCell { row: 2, col: 0 }));
        assert!(!step.is_death_cell(GridCell { row: 0, col: 2 }));
    }
}
