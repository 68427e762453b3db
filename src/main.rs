use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "graph-csv")]
#[command(about = "Convert a graph JSON export into bulk-import CSV files", long_about = None)]
struct Cli {
    /// Path to the JSON export; CSV files go to a `csv` directory beside it.
    input: PathBuf,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("graph_csv=info"));

    // stderr only: stdout carries the manifest.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let manifest = graph_csv::convert(&cli.input)
        .with_context(|| format!("convert {}", cli.input.display()))?;

    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
