use crate::commitment::json::serialize_js_number;
use crate::error::{Result, VerifyError};
use crate::outcome::{death_tile_index, row_multipliers, Dimension};
use serde::Serialize;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Ordered, non-empty list of per-row tile counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileCounts(Vec<NonZeroU32>);

impl TileCounts {
    pub fn new(counts: Vec<u32>) -> Result<Self> {
        if counts.is_empty() {
            return Err(VerifyError::tile_counts("no rows given"));
        }
        counts
            .into_iter()
            .enumerate()
            .map(|(i, n)| {
                NonZeroU32::new(n).ok_or_else(|| {
                    VerifyError::tile_counts(format!("row {} has zero tiles", i + 1))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[NonZeroU32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn max(&self) -> u32 {
        self.0.iter().map(|n| n.get()).max().unwrap_or(0)
    }
}

impl FromStr for TileCounts {
    type Err = VerifyError;

    /// Comma-separated positive integers, whitespace around entries ignored.
    fn from_str(s: &str) -> Result<Self> {
        let counts = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u32>()
                    .map_err(|_| VerifyError::tile_counts(format!("'{}' is not a number", part)))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(counts)
    }
}

/// Row of the tile-elimination game. Field order is part of the hash contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRow {
    pub tiles: u32,
    pub death_tile_index: u32,
    #[serde(serialize_with = "serialize_js_number")]
    pub multiplier: f64,
}

/// Row of the grid-elimination game. Field order is part of the hash contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub tiles: u32,
    pub dimension: Dimension,
    pub death_tile_index: u32,
    #[serde(serialize_with = "serialize_js_number")]
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Row {
    Tile(TileRow),
    Grid(GridRow),
}

impl Row {
    pub fn tiles(&self) -> u32 {
        match self {
            Row::Tile(r) => r.tiles,
            Row::Grid(r) => r.tiles,
        }
    }

    pub fn death_tile_index(&self) -> u32 {
        match self {
            Row::Tile(r) => r.death_tile_index,
            Row::Grid(r) => r.death_tile_index,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Row::Tile(r) => r.multiplier,
            Row::Grid(r) => r.multiplier,
        }
    }
}

pub fn reconstruct_tile_rows(counts: &TileCounts, seed: &str) -> Vec<TileRow> {
    let multipliers = row_multipliers(counts.as_slice());
    counts
        .as_slice()
        .iter()
        .zip(multipliers)
        .enumerate()
        .map(|(i, (&tiles, multiplier))| {
            let death_tile_index = death_tile_index(seed, i, tiles);
            tracing::debug!(row = i, tiles = tiles.get(), death_tile_index, multiplier, "Derived tile row");
            TileRow {
                tiles: tiles.get(),
                death_tile_index,
                multiplier,
            }
        })
        .collect()
}

pub fn reconstruct_grid_rows(counts: &TileCounts, seed: &str) -> Vec<GridRow> {
    let multipliers = row_multipliers(counts.as_slice());
    counts
        .as_slice()
        .iter()
        .zip(multipliers)
        .enumerate()
        .map(|(i, (&tiles, multiplier))| {
            let dimension = Dimension::for_row(i);
            let death_tile_index = death_tile_index(seed, i, tiles);
            tracing::debug!(row = i, tiles = tiles.get(), %dimension, death_tile_index, multiplier, "Derived grid row");
            GridRow {
                tiles: tiles.get(),
                dimension,
                death_tile_index,
                multiplier,
            }
        })
        .collect()
}

/// The exact value whose serialization is hashed into a commitment.
/// Built once per verification and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalState {
    version: String,
    rows: Vec<Row>,
    seed: String,
}

impl CanonicalState {
    pub fn without_rows(version: impl Into<String>, seed: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            rows: Vec::new(),
            seed: seed.into(),
        }
    }

    pub fn tiles(version: impl Into<String>, seed: impl Into<String>, counts: &TileCounts) -> Self {
        let seed = seed.into();
        let rows = reconstruct_tile_rows(counts, &seed)
            .into_iter()
            .map(Row::Tile)
            .collect();
        Self {
            version: version.into(),
            rows,
            seed,
        }
    }

    pub fn grid(version: impl Into<String>, seed: impl Into<String>, counts: &TileCounts) -> Self {
        let seed = seed.into();
        let rows = reconstruct_grid_rows(counts, &seed)
            .into_iter()
            .map(Row::Grid)
            .collect();
        Self {
            version: version.into(),
            rows,
            seed,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
