use std::io;
use std::path::PathBuf;

use clap::Parser;
use term_2048::config::Config;
use term_2048::game::{self, Game};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "term-2048", about = "Play 2048 in the terminal")]
struct Args {
    /// TOML settings file; flags below override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Seed the tile spawner for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Debug logging and merge markers on the board
    #[arg(long)]
    debug: bool,

    /// Colored tiles
    #[arg(long)]
    color: bool,

    /// Show the sample board before starting
    #[arg(long)]
    sample: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(Config, bool)> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml(path)?,
            None => Config::default(),
        };
        if let Some(rows) = self.rows { config.rows = rows; }
        if let Some(cols) = self.cols { config.cols = cols; }
        if self.seed.is_some() { config.seed = self.seed; }
        config.debug |= self.debug;
        config.color |= self.color;
        config.validate()?;
        Ok((config, self.sample))
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let (config, sample) = Args::parse().into_config()?;
    init_logging(config.debug);
    tracing::debug!(?config, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();

    if sample {
        game::show_sample(&config, stdin.lock(), stdout.lock())?;
    }

    let mut game = Game::from_config(&config)?;
    game.start();
    let summary = game.run(stdin.lock(), stdout.lock())?;
    tracing::info!(elapsed_s = summary.elapsed.as_secs_f64(), "session over");
    Ok(())
}
