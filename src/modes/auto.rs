//! Automatic play
//!
//! Plays a number of games through the same [`GameController`] the
//! interactive mode uses, choosing moves with a simple policy, and prints a
//! summary at the end. Useful for exercising the game flow end to end.
//!
//! # Example
//!
//! ```rust,ignore
//! use term_2048::config::AppConfig;
//! use term_2048::modes::{AutoConfig, AutoMode, Policy};
//!
//! let config = AutoConfig {
//!     games: 100,
//!     policy: Policy::Cycle,
//!     ..Default::default()
//! };
//! let mut auto_mode = AutoMode::new(&AppConfig::default(), config)?;
//! let summaries = auto_mode.run()?;
//! ```

use anyhow::Result;
use clap::ValueEnum;
use log::{debug, info};
use rand::Rng;
use std::collections::BTreeMap;

use crate::config::AppConfig;
use crate::game::{Direction, GameController, GameState, InputAction};
use crate::persistence::BestScoreStore;

/// How the next move is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Policy {
    /// Uniformly random direction
    #[default]
    Random,
    /// Left, Down, Right, Up, repeated
    Cycle,
}

/// Configuration for automatic play
#[derive(Debug, Clone)]
pub struct AutoConfig {
    /// Number of games to play
    pub games: usize,

    /// Move selection policy
    pub policy: Policy,

    /// Stop a game after this many moves (0 = until it ends)
    pub max_moves: usize,

    /// Print the board after every move
    pub verbose: bool,
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self {
            games: 1,
            policy: Policy::Random,
            max_moves: 10_000,
            verbose: false,
        }
    }
}

/// Outcome of one automatically played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub max_tile: u32,
    pub moves: usize,
    pub final_state: GameState,
}

pub struct AutoMode {
    config: AutoConfig,
    controller: GameController,
    rng: rand::rngs::ThreadRng,
    cycle: usize,
}

impl AutoMode {
    /// Load the best score and prepare the first game
    pub fn new(app_config: &AppConfig, config: AutoConfig) -> Result<Self> {
        let store = BestScoreStore::new(&app_config.best_score_path);
        let best = store.load()?;
        Ok(Self::with_controller(
            GameController::new(best, store.notifier()),
            config,
        ))
    }

    pub fn with_controller(controller: GameController, config: AutoConfig) -> Self {
        Self {
            config,
            controller,
            rng: rand::thread_rng(),
            cycle: 0,
        }
    }

    /// Play every configured game and print the summary
    pub fn run(&mut self) -> Result<Vec<GameSummary>> {
        let mut summaries = Vec::with_capacity(self.config.games);

        for game in 0..self.config.games {
            if game > 0 {
                self.start_next_game();
            }

            let summary = self.play_game();
            info!(
                "game {} finished: {} score={} max_tile={} moves={}",
                game + 1,
                summary.final_state,
                summary.score,
                summary.max_tile,
                summary.moves
            );
            if self.config.verbose {
                println!(
                    "Game {}: {} score={} max_tile={} moves={}",
                    game + 1,
                    summary.final_state,
                    summary.score,
                    summary.max_tile,
                    summary.moves
                );
            }
            summaries.push(summary);
        }

        println!(
            "{}",
            format_report(&summaries, self.config.policy, self.controller.best_score())
        );
        Ok(summaries)
    }

    fn play_game(&mut self) -> GameSummary {
        let mut moves = 0;

        while self.controller.state() == GameState::Playing
            && (self.config.max_moves == 0 || moves < self.config.max_moves)
        {
            let direction = self.next_direction();
            self.controller.handle_input(InputAction::Move(direction));
            moves += 1;

            if self.config.verbose {
                println!("Move {}: {:?}", moves, direction);
                print!("{}", self.controller.grid());
            }
        }

        GameSummary {
            score: self.controller.score(),
            max_tile: self.controller.grid().max_tile(),
            moves,
            final_state: self.controller.state(),
        }
    }

    /// Leave the finished (or cut off) game through the normal confirmation flow
    fn start_next_game(&mut self) {
        if self.controller.state() == GameState::Playing {
            self.controller.handle_input(InputAction::RequestRestart);
        }
        let state = self.controller.handle_input(InputAction::ConfirmRequest);
        debug!("next game ready: {}", state);
    }

    fn next_direction(&mut self) -> Direction {
        match self.config.policy {
            Policy::Random => Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())],
            Policy::Cycle => {
                let direction = Direction::ALL[self.cycle % Direction::ALL.len()];
                self.cycle += 1;
                direction
            }
        }
    }
}

/// Summary text in `key=value` lines
pub fn format_report(summaries: &[GameSummary], policy: Policy, best_score: u32) -> String {
    let games = summaries.len();
    let total: u64 = summaries.iter().map(|s| u64::from(s.score)).sum();
    let avg = if games == 0 {
        0.0
    } else {
        total as f64 / games as f64
    };
    let max_score = summaries.iter().map(|s| s.score).max().unwrap_or(0);
    let max_tile = summaries.iter().map(|s| s.max_tile).max().unwrap_or(0);
    let wins = summaries
        .iter()
        .filter(|s| s.final_state == GameState::Won)
        .count();

    let mut tiles: BTreeMap<u32, usize> = BTreeMap::new();
    for summary in summaries {
        *tiles.entry(summary.max_tile).or_insert(0) += 1;
    }
    let distribution = tiles
        .iter()
        .map(|(tile, count)| format!("{}:{}", tile, count))
        .collect::<Vec<_>>()
        .join(",");

    let lines = [
        "=== Auto Play Results ===".to_string(),
        format!("games={}", games),
        format!("policy={:?}", policy),
        format!("wins={}", wins),
        format!("avg_score={:.2}", avg),
        format!("max_score={}", max_score),
        format!("best_score={}", best_score),
        format!("max_tile={}", max_tile),
        format!("tile_distribution={}", distribution),
    ];
    lines.join("\n")
}
