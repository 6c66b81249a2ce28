use clap::Parser;
use evcal_core::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "evcal")]
#[command(about = "Line-oriented event calendar", long_about = None)]
struct Cli {
    /// Read commands from this file instead of stdin
    input: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    evcal_core::logging::init_with_level(level);
    tracing::debug!(?config, "Configuration ready");

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    // Fatal command errors are part of the output, not the exit status
    let mut interpreter = Interpreter::new(io::stdout().lock());
    interpreter.run(reader)?;

    Ok(())
}
