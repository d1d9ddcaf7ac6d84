use clap::Args;
use comfy_table::{presets::UTF8_FULL, Table};
use fairproof_core::{DiceGame, DiceRoll, Result, VerifyError};

#[derive(Args)]
pub struct RollArgs {
    /// Revealed game seed
    #[arg(long)]
    pub seed: String,

    /// First roll to show (1-based, as displayed)
    #[arg(long, default_value_t = 1)]
    pub from: u64,

    /// Number of rolls to show
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: u64,
}

pub async fn handle_roll(args: RollArgs) -> Result<()> {
    let seed = args.seed.trim();
    if seed.is_empty() {
        return Err(VerifyError::missing("seed"));
    }
    if args.from == 0 {
        return Err(VerifyError::input("Rolls are numbered from 1"));
    }

    println!("{}", dice_table(&DiceGame.rolls(seed, args.from - 1, args.count)));
    Ok(())
}

/// Rolls numbered from 1, as players see them.
pub fn dice_table(rolls: &[DiceRoll]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Roll", "Die 1", "Die 2", "Total"]);
    for roll in rolls {
        table.add_row(vec![
            (roll.roll_index + 1).to_string(),
            roll.dice[0].to_string(),
            roll.dice[1].to_string(),
            roll.total().to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_table_numbers_from_one() {
        let rendered = dice_table(&DiceGame.rolls("abc", 0, 2)).to_string();
        assert!(rendered.contains("Total"));
        assert_eq!(rendered.lines().filter(|l| l.starts_with("│ 1 ")).count(), 1);
        assert_eq!(rendered.lines().filter(|l| l.starts_with("│ 2 ")).count(), 1);
        assert!(!rendered.lines().any(|l| l.starts_with("│ 0 ")));
    }
}
