use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ristiseiska::{GameConfig, PolicyKind};
use ristiseiska_cli::{check_table_size, load_config, simulate, Session};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to a JSON file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of human players
    #[arg(long)]
    humans: Option<usize>,

    /// Number of computer players
    #[arg(long)]
    ai: Option<usize>,

    /// How the computer players choose their cards: "first" or "random"
    #[arg(short, long)]
    policy: Option<PolicyKind>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    ai_delay_ms: Option<u64>,

    /// Play this many games with computer players only, and print the results
    #[arg(short = 'n', long)]
    games: Option<usize>,

    /// Print the game state as JSON instead of drawing it
    #[arg(long, default_value_t = false)]
    json: bool,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };
        if let Some(humans) = self.humans {
            config.human_players = humans;
        }
        if let Some(ai) = self.ai {
            config.ai_players = ai;
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if let Some(delay) = self.ai_delay_ms {
            config.ai_delay_ms = delay;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = args.game_config()?;

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    if let Some(num_games) = args.games {
        let score = simulate(&config, num_games, &mut rng)?;
        eprintln!("{}", score.summary());
        return Ok(());
    }

    check_table_size(&config)?;
    let mut session = Session::new(config, rng, args.json)?;
    session.run(std::io::stdin().lock(), std::io::stdout().lock())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
