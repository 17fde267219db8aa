//! Headless slide-2048 runner (default binary).
//!
//! Plays one seeded game with the autoplay policy and prints a JSON summary.
//! Logging goes to stderr via `env_logger` (`RUST_LOG=debug` for per-game
//! events).

use anyhow::Result;

use slide_2048::autoplay::{parse_autoplay_args, run, SEED_ENV};
use slide_2048::core::{BestScore, MemoryStore};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_seed = std::env::var(SEED_ENV).ok();
    let config = parse_autoplay_args(&args, env_seed.as_deref())?;

    let mut best = BestScore::load(MemoryStore::new());
    let summary = run(&config, &mut best);
    log::info!(
        "seed {}: score {} in {} moves (max tile {})",
        summary.seed,
        summary.score,
        summary.moves,
        summary.max_tile
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
