use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Env, Target};
use std::fs::File;
use std::path::PathBuf;
use term_2048::config::{AppConfig, DEFAULT_BEST_SCORE_FILE};
use term_2048::modes::{AutoConfig, AutoMode, HumanMode, Policy};

#[derive(Parser)]
#[command(name = "term_2048")]
#[command(version, about = "The 2048 sliding-tile puzzle in the terminal")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// File the best score is loaded from and saved to
    #[arg(long, default_value = DEFAULT_BEST_SCORE_FILE)]
    best_score_file: PathBuf,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Number of games to play in auto mode
    #[arg(long, default_value = "1")]
    games: usize,

    /// Move policy for auto mode
    #[arg(long, value_enum, default_value = "random")]
    policy: Policy,

    /// Maximum moves per game in auto mode (0 = unlimited)
    #[arg(long, default_value = "10000")]
    max_moves: usize,

    /// Print the board after every move in auto mode
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with the keyboard
    Human,
    /// Let a simple policy play and print a summary
    Auto,
}

fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(
        Env::default().default_filter_or(config.default_log_filter(interactive)),
    );

    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {:?}", path))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::new(cli.best_score_file).with_log_file(cli.log_file);
    init_logging(&config, matches!(cli.mode, Mode::Human))?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(&config)?;
            human_mode.run().await?;
        }
        Mode::Auto => {
            let auto_config = AutoConfig {
                games: cli.games,
                policy: cli.policy,
                max_moves: cli.max_moves,
                verbose: cli.verbose,
            };
            let mut auto_mode = AutoMode::new(&config, auto_config)?;
            auto_mode.run()?;
        }
    }

    Ok(())
}
