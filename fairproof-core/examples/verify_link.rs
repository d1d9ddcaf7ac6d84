use fairproof_core::{GameRegistry, RawParams, Verifier, VerifierConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let verifier = Verifier::new(GameRegistry::with_builtin_games(), VerifierConfig::default())?;

    // Parameters as they appear in a shared verification link
    let params = RawParams::from_query(
        "game=deathFun&version=v1&rows=3,4,5&seed=test-seed\
         &hash=0x1fd05003faaf5d375fc2d49236cd87469b85ceb725cd8e5418538160aa9738df",
    );

    let report = verifier.verify(params.get("game"), &params).await?;
    println!("{}", report.message);
    println!("Computed: {}", report.computed_hash);

    for (i, row) in report.state.canonical.rows().iter().enumerate() {
        println!(
            "Row {}: {} tiles, death tile {}, multiplier {:.4}",
            i + 1,
            row.tiles(),
            row.death_tile_index(),
            row.multiplier()
        );
    }

    Ok(())
}
