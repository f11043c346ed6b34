use clap::Parser;
use judge::{format_summary, run_games, MatchScore, PlayerSpec, RunConfig, DEFAULT_MAX_TURNS};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// The first player: "balanced", "aggressive", "defensive" or "random"
    player_1: PlayerSpec,

    /// The second player, same choices as the first
    player_2: PlayerSpec,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a game after this many turns
    #[arg(short, long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Play games on this many threads
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let config = RunConfig {
        players: [args.player_1, args.player_2],
        num_games: args.num_games,
        seed,
        max_turns: args.max_turns,
        threads: args.threads,
    };
    let records = run_games(&config)?;
    let score: MatchScore = records.iter().collect();
    info!(
        wins_1 = score.wins[0],
        wins_2 = score.wins[1],
        draws = score.draws,
        capped = score.capped,
        "Run finished"
    );

    let names = config.players.map(|spec| spec.to_string());
    println!("{} vs {}", names[0], names[1]);
    println!("{}", format_summary(&score, &names));

    Ok(())
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
