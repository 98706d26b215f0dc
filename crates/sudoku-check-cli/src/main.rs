use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sudoku_check_core::{evaluate, LoadOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sudoku-check",
    version,
    about = "Check that no row or column of a Sudoku board repeats a digit"
)]
struct Cli {
    #[arg(help = "Board file: a size line, then one delimited row per line")]
    path: PathBuf,

    #[arg(long, help = "Print a JSON report instead of the bare verdict")]
    json: bool,

    #[arg(long, default_value_t = ',', help = "Separator between values on a line")]
    delimiter: char,

    #[arg(long, help = "Reject non-numeric cells instead of reading them as blanks")]
    strict: bool,

    #[arg(short, long, help = "Log loader and checker details to stderr")]
    verbose: bool,
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: self.delimiter,
            strict: self.strict,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file = File::open(&cli.path)
        .with_context(|| format!("Can't open {} for reading", cli.path.display()))?;
    debug!(path = %cli.path.display(), "Opened board file");

    let outcome = evaluate(BufReader::new(file), &cli.load_options())
        .with_context(|| format!("Failed to read board from {}", cli.path.display()))?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer(&mut stdout, &outcome.report())?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", outcome.verdict())?;
    }
    stdout.flush()?;

    Ok(())
}
