use comfy_table::{presets::UTF8_FULL, Table};
use fairproof_core::hash::digest_hex_async;
use fairproof_core::{Result, Verifier};

pub fn handle_games(verifier: &Verifier) -> Result<()> {
    let registry = verifier.registry();
    let canonical = registry.names();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Game", "Name", "Required", "Optional"]);
    for game in registry.games() {
        let default_marker = if game.name() == verifier.config().default_game {
            " (default)"
        } else {
            ""
        };
        table.add_row(vec![
            format!("{}{}", game.name(), default_marker),
            game.display_name().to_string(),
            game.required_inputs().join(", "),
            game.optional_inputs().join(", "),
        ]);
    }
    println!("{}", table);

    let aliases: Vec<&str> = registry
        .accepted_names()
        .into_iter()
        .filter(|name| !canonical.iter().any(|c| c == name))
        .collect();
    if !aliases.is_empty() {
        println!("Aliases: {}", aliases.join(", "));
    }

    Ok(())
}

pub async fn handle_hash(text: String) -> Result<()> {
    println!("{}", digest_hex_async(text).await?);
    Ok(())
}
