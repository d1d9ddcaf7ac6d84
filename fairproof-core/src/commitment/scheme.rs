use crate::error::{Result, VerifyError};
use crate::state::{CanonicalState, Row};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serialization shapes that have been used to publish commitments.
///
/// All shapes share the key order `version`, `rows`, `seed` and compact JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommitmentFormat {
    /// Rows in play order; `[]` for games without rows.
    #[default]
    Standard,
    /// Rows listed last-played first, as the older tile verifier displayed them.
    ReversedRows,
    /// Like `Standard`, but the `rows` key is dropped when there are no rows.
    OmitEmptyRows,
}

impl CommitmentFormat {
    pub const ALL: [CommitmentFormat; 3] = [
        CommitmentFormat::Standard,
        CommitmentFormat::ReversedRows,
        CommitmentFormat::OmitEmptyRows,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitmentFormat::Standard => "standard",
            CommitmentFormat::ReversedRows => "reversed-rows",
            CommitmentFormat::OmitEmptyRows => "omit-empty-rows",
        }
    }
}

impl fmt::Display for CommitmentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitmentFormat {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                VerifyError::input(format!(
                    "Unknown commitment format '{}' (expected one of: standard, reversed-rows, omit-empty-rows)",
                    s
                ))
            })
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<&'a Row>>,
    seed: &'a str,
}

/// Compact JSON text that is hashed for a commitment.
pub fn canonical_json(state: &CanonicalState, format: CommitmentFormat) -> Result<String> {
    let rows = match format {
        CommitmentFormat::Standard => Some(state.rows().iter().collect()),
        CommitmentFormat::ReversedRows => Some(state.rows().iter().rev().collect()),
        CommitmentFormat::OmitEmptyRows if state.rows().is_empty() => None,
        CommitmentFormat::OmitEmptyRows => Some(state.rows().iter().collect()),
    };

    let payload = Payload {
        version: state.version(),
        rows,
        seed: state.seed(),
    };
    Ok(serde_json::to_string(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TileCounts;

    #[test]
    fn test_standard_json_shape() {
        let counts: TileCounts = "3,4,5".parse().unwrap();
        let state = CanonicalState::tiles("v1", "test-seed", &counts);
        assert_eq!(
            canonical_json(&state, CommitmentFormat::Standard).unwrap(),
            concat!(
                r#"{"version":"v1","rows":["#,
                r#"{"tiles":3,"deathTileIndex":1,"multiplier":1.4249999999999998},"#,
                r#"{"tiles":4,"deathTileIndex":0,"multiplier":1.8999999999999995},"#,
                r#"{"tiles":5,"deathTileIndex":4,"multiplier":2.3749999999999996}"#,
                r#"],"seed":"test-seed"}"#
            )
        );
    }

    #[test]
    fn test_grid_json_field_order() {
        let counts: TileCounts = "5,5".parse().unwrap();
        let state = CanonicalState::grid("v1", "grid-seed", &counts);
        assert_eq!(
            canonical_json(&state, CommitmentFormat::Standard).unwrap(),
            concat!(
                r#"{"version":"v1","rows":["#,
                r#"{"tiles":5,"dimension":"col","deathTileIndex":3,"multiplier":1.1875},"#,
                r#"{"tiles":5,"dimension":"row","deathTileIndex":4,"multiplier":1.484375}"#,
                r#"],"seed":"grid-seed"}"#
            )
        );
    }

    #[test]
    fn test_rowless_shapes() {
        let state = CanonicalState::without_rows("v1", "abc");
        assert_eq!(
            canonical_json(&state, CommitmentFormat::Standard).unwrap(),
            r#"{"version":"v1","rows":[],"seed":"abc"}"#
        );
        assert_eq!(
            canonical_json(&state, CommitmentFormat::OmitEmptyRows).unwrap(),
            r#"{"version":"v1","seed":"abc"}"#
        );
    }

    #[test]
    fn test_seed_is_escaped() {
        let state = CanonicalState::without_rows("v1", "a\"b\\c\n\u{1}");
        assert_eq!(
            canonical_json(&state, CommitmentFormat::Standard).unwrap(),
            r#"{"version":"v1","rows":[],"seed":"a\"b\\c\n\u0001"}"#
        );
    }

    #[test]
    fn test_format_names() {
        for format in CommitmentFormat::ALL {
            assert_eq!(format.as_str().parse::<CommitmentFormat>().unwrap(), format);
        }
        assert!("sorted".parse::<CommitmentFormat>().is_err());
    }
}
