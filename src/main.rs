use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use spellbee::cache::CacheStore;
use spellbee::checker::textgears::TextGearsClient;
use spellbee::config::Config;
use spellbee::resolver::resolve;

#[derive(Parser)]
#[command(
    name = "spellbee",
    version,
    about = "Pick 'a' or 'an' for a word, checked against TextGears."
)]
struct Cli {
    /// Word to find the article for
    word: Option<String>,

    /// Create the cache database and exit
    #[arg(long)]
    init: bool,

    /// Cache database path (default: ~/.config/spellbee/cache.db)
    #[arg(short, long)]
    db: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// Accept the single-dash `-init` spelling alongside `--init`.
fn normalize_args(args: impl Iterator<Item = String>) -> Vec<String> {
    args.map(|arg| if arg == "-init" { "--init".to_string() } else { arg })
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_from(normalize_args(std::env::args()));

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("spellbee={level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = Config::from_env(cli.db.clone())?;
    run(cli, config).await
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<ExitCode> {
    if cli.init {
        CacheStore::initialize(&config.db_path)?;
        println!("Database initialized successfully.");
        return Ok(ExitCode::SUCCESS);
    }

    let Some(word) = cli.word else {
        println!("Please provide a word as an argument.");
        return Ok(ExitCode::FAILURE);
    };

    let cache = CacheStore::open(&config.db_path)?;
    let checker = TextGearsClient::from_config(&config);
    let resolution = resolve(&word, &cache, &checker).await?;

    println!("{}", resolution.sentence());
    Ok(ExitCode::SUCCESS)
}
