use std::io;

use clap::Parser;
use num_rational::BigRational;
use pattern_finder::inference::config::{DEFAULT_STARTING_AT, DEFAULT_TOLERANCE};
use pattern_finder::inference::polynomial::DEFAULT_MAX_DEPTH;
use pattern_finder::session::{self, Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pattern-finder", author, version)]
#[command(about = "Finds the polynomial behind a comma-separated list of numbers", long_about = None)]
struct Cli {
    /// x-value of the first number
    #[arg(short, long, default_value_t = DEFAULT_STARTING_AT, allow_negative_numbers = true)]
    starting_at: i64,

    /// Use exact rational arithmetic instead of floating point
    #[arg(short, long)]
    exact: bool,

    /// Absolute tolerance when comparing differences (0 = exact equality)
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Maximum finite-difference levels per term
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not fall back to an exponential fit
    #[arg(long)]
    no_exponential: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings {
        starting_at: cli.starting_at,
        tolerance: cli.tolerance,
        max_depth: cli.max_depth,
        exponential: !cli.no_exponential,
    };
    tracing::info!(?settings, exact = cli.exact, "pattern-finder v{}", env!("CARGO_PKG_VERSION"));

    let stdin  = io::stdin().lock();
    let stdout = io::stdout().lock();
    if cli.exact {
        session::run::<BigRational, _, _>(&settings, stdin, stdout)?;
    } else {
        session::run::<f64, _, _>(&settings, stdin, stdout)?;
    }
    Ok(())
}
