use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use unbranch_k::io::FileSource;
use unbranch_k::search::{self, SearchOpt, DEFAULT_MAX_K};
use unbranch_k::util::dna;

#[derive(Parser, Debug)]
#[command(
    name = "unbranch-k",
    author,
    version,
    about = "Smallest k at which every k-mer has exactly one successor k-mer",
    arg_required_else_help = true
)]
struct Cli {
    /// Sequence file: one sequence per line, lines starting with '>' are skipped
    file: String,
    /// Largest k to try before giving up
    #[arg(long = "max-k", default_value_t = DEFAULT_MAX_K)]
    max_k: usize,
    /// First k to try
    #[arg(long = "start-k", default_value_t = 1)]
    start_k: usize,
    /// Reject input containing anything other than A/C/G/T
    #[arg(long)]
    strict: bool,
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let opt = SearchOpt { start_k: cli.start_k, max_k: cli.max_k };
    run_search(&cli.file, cli.strict, opt)
}

fn run_search(path: &str, strict: bool, opt: SearchOpt) -> Result<()> {
    let source = FileSource::new(path);

    if strict {
        let n = dna::validate_source(&source)?;
        tracing::debug!(sequences = n, "alphabet check passed");
    }

    let outcome = search::search(&source, &opt)?;
    println!(
        "The smallest k with a unique subsequent k-mer for each k-mer is: {}",
        outcome
    );
    Ok(())
}
