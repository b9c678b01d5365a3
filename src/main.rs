use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dial::interpreter::Interpreter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File with one rotation per line, e.g. `L68` or `R48`
    #[arg(default_value = "input-2025.txt")]
    path: PathBuf,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();
    let file = File::open(&args.path)
        .with_context(|| format!("could not open '{}'", args.path.display()))?;

    let counters = Interpreter::new()
        .execute(&mut BufReader::new(file))
        .with_context(|| format!("failed to read '{}'", args.path.display()))?;

    println!("Part 1 Answer: {}", counters.zero_landings);
    println!("Part 2 Answer: {}", counters.total_crossings);
    Ok(())
}
