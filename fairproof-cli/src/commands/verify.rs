use super::roll::dice_table;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Table};
use fairproof_core::commitment::json::js_number;
use fairproof_core::game::{tiles::row_views, GridStep};
use fairproof_core::{
    CommitmentFormat, DiceGame, RawParams, Result, StateDetail, VerificationReport, Verifier,
};

#[derive(Args)]
pub struct VerifyArgs {
    /// Game to verify (dice, deathFun, death_race, laser_party)
    pub game: Option<String>,

    /// Query string as found in a verification link, e.g. "rows=3,4&seed=...&hash=0x..."
    #[arg(short, long)]
    pub query: Option<String>,

    /// Extra key=value input, may be repeated
    #[arg(short, long = "param")]
    pub params: Vec<String>,

    /// Version string hashed into the commitment
    #[arg(long = "game-version")]
    pub game_version: Option<String>,

    /// Comma-separated tile counts, one per row
    #[arg(long)]
    pub rows: Option<String>,

    /// Revealed game seed
    #[arg(long)]
    pub seed: Option<String>,

    /// Published commitment hash
    #[arg(long)]
    pub hash: Option<String>,

    /// Player picks: "1,0,2" for tile games, "0,3;4,4" for grid games
    #[arg(long)]
    pub selected_tiles: Option<String>,

    /// Commitment format (standard, reversed-rows, omit-empty-rows)
    #[arg(long)]
    pub format: Option<String>,

    /// Number of dice rolls to list
    #[arg(long, default_value_t = 1)]
    pub rolls: u64,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 2 when the hash does not match
    #[arg(long)]
    pub strict: bool,
}

impl VerifyArgs {
    /// Query string first, then `--param` pairs, then dedicated flags.
    fn raw_params(&self) -> Result<RawParams> {
        let mut params = self
            .query
            .as_deref()
            .map(RawParams::from_query)
            .unwrap_or_default();

        let extra = RawParams::from_pairs(&self.params)?;
        for key in extra.keys() {
            if let Some(value) = extra.get(key) {
                params.insert(key, value);
            }
        }

        let flags = [
            ("version", &self.game_version),
            ("rows", &self.rows),
            ("seed", &self.seed),
            ("hash", &self.hash),
            ("selectedTiles", &self.selected_tiles),
        ];
        for (key, value) in flags {
            if let Some(value) = value {
                params.insert(key, value.as_str());
            }
        }

        Ok(params)
    }
}

/// Returns `false` when `--strict` is set and the hash does not match.
pub async fn handle_verify(args: VerifyArgs, verifier: &Verifier) -> Result<bool> {
    let params = args.raw_params()?;
    let game = args
        .game
        .clone()
        .or_else(|| params.get("game").map(str::to_string));
    let format = match args.format.as_deref() {
        Some(f) => f.parse::<CommitmentFormat>()?,
        None => verifier.config().format,
    };

    let report = verifier
        .verify_with_format(game.as_deref(), &params, format)
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.rolls);
    }

    Ok(report.matches || !args.strict)
}

fn print_report(report: &VerificationReport, rolls: u64) {
    println!("{} Hash Verifier", report.display_name);
    println!();
    println!("{}", report.message);
    if !report.matches {
        println!("  Expected: {}", report.expected_hash);
        println!("  Computed: {}", report.computed_hash);
    }
    println!("  Format: {}", report.format);
    println!();

    let canonical = &report.state.canonical;
    match &report.state.detail {
        StateDetail::Dice { roll_index, .. } => {
            let rolls = DiceGame.rolls(canonical.seed(), *roll_index, rolls.max(1));
            println!("{}", dice_table(&rolls));
        }

        StateDetail::Tiles { selected_tiles } => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Row", "Tiles", "Death Tile", "Multiplier", "Board"]);
            for view in row_views(canonical.rows(), selected_tiles) {
                let board = tile_strip(view.tiles, view.death_tile_index, view.selected_tile);
                table.add_row(vec![
                    view.label.to_string(),
                    view.tiles.to_string(),
                    view.death_tile_index.to_string(),
                    format!("{}x", js_number(view.multiplier)),
                    board,
                ]);
            }
            println!("{}", table);
        }

        StateDetail::Grid { steps, .. } => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Step", "Grid", "Death Line", "Selected", "Hit"]);
            for (i, step) in steps.iter().enumerate() {
                table.add_row(grid_row(i, step));
            }
            println!("{}", table);
        }
    }
}

/// `X` marks the death tile, brackets mark the player's pick.
fn tile_strip(tiles: u32, death: u32, selected: Option<u32>) -> String {
    (0..tiles)
        .map(|t| {
            let mark = if t == death { 'X' } else { 'o' };
            if selected == Some(t) {
                format!("[{}]", mark)
            } else {
                format!(" {} ", mark)
            }
        })
        .collect()
}

fn grid_row(index: usize, step: &GridStep) -> Vec<String> {
    let death_line = step
        .death_line
        .map(|(dim, idx)| format!("{} {}", dim, idx))
        .unwrap_or_else(|| "-".to_string());
    let selected = step
        .selected
        .map(|c| format!("{},{}", c.row, c.col))
        .unwrap_or_else(|| "-".to_string());
    vec![
        index.to_string(),
        format!("{}x{}", step.grid_rows, step.grid_cols),
        death_line,
        selected,
        if step.hit { "yes" } else { "" }.to_string(),
    ]
}
