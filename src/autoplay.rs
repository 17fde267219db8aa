//! Headless autoplay runner.
//!
//! Plays one seeded game with a fixed direction priority and reports the
//! outcome. No rendering, no input: it drives the engine exactly the way a
//! presentation layer would, which makes it a convenient smoke test and
//! benchmark driver.

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{BestScore, BestScoreStore, GameState, MemoryStore, TileSpawner};
use crate::types::{Direction, Phase, Rows, Tile};

/// Environment variable consulted when `--seed` is not given
pub const SEED_ENV: &str = "SLIDE2048_SEED";

/// Default cap on effective moves
pub const DEFAULT_MAX_MOVES: u32 = 100_000;

/// Corner-hugging priority: keep big tiles at the bottom-left
pub const PRIORITY: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub max_moves: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_moves: DEFAULT_MAX_MOVES,
        }
    }
}

/// Parse `[--seed N] [--max-moves N]`.
///
/// `env_seed` is the raw value of [`SEED_ENV`], used when `--seed` is absent.
pub fn parse_autoplay_args(args: &[String], env_seed: Option<&str>) -> Result<AutoplayConfig> {
    let mut config = AutoplayConfig::default();

    if let Some(v) = env_seed {
        config.seed = v
            .trim()
            .parse::<u64>()
            .map_err(|_| anyhow!("autoplay: invalid {} value: {}", SEED_ENV, v))?;
    }

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("autoplay: missing value for --seed"))?;
                config.seed = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("autoplay: invalid --seed value: {}", v))?;
            }
            "--max-moves" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("autoplay: missing value for --max-moves"))?;
                config.max_moves = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("autoplay: invalid --max-moves value: {}", v))?;
            }
            other => {
                return Err(anyhow!("autoplay: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Final report of an autoplay run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoplaySummary {
    pub seed: u64,
    pub moves: u32,
    pub score: u32,
    pub best: u32,
    pub max_tile: Tile,
    pub won: bool,
    pub terminal: bool,
    pub phase: Phase,
    pub grid: Rows,
}

/// Pick the first direction in [`PRIORITY`] that would move something
pub fn next_direction<S: TileSpawner>(game: &GameState<S>) -> Option<Direction> {
    PRIORITY.into_iter().find(|&dir| game.can_move(dir))
}

/// Play one game until it is terminal or `max_moves` effective moves are made.
///
/// The best score is folded into `best` after every scoring move.
pub fn run<St: BestScoreStore>(config: &AutoplayConfig, best: &mut BestScore<St>) -> AutoplaySummary {
    let mut game = GameState::new(config.seed);
    log::debug!("autoplay: seed {} max_moves {}", config.seed, config.max_moves);

    while game.moves() < config.max_moves {
        let Some(dir) = next_direction(&game) else {
            break;
        };
        let result = game.apply_move(dir);
        if result.score_delta > 0 {
            best.observe(result.score);
        }
        if result.terminal {
            break;
        }
    }

    let snap = game.snapshot();
    AutoplaySummary {
        seed: config.seed,
        moves: snap.moves,
        score: snap.score,
        best: best.best(),
        max_tile: snap.max_tile,
        won: snap.won,
        terminal: snap.terminal,
        phase: snap.phase,
        grid: snap.grid,
    }
}

/// [`run`] with a fresh in-memory best score
pub fn run_fresh(config: &AutoplayConfig) -> AutoplaySummary {
    let mut best = BestScore::load(MemoryStore::new());
    run(config, &mut best)
}
