use std::path::PathBuf;

use clap::Parser;
use fixbrot_tools::{FlattenError, Flattener, Result, config, logging};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init()?;

    if !cli.include_dir.exists() {
        return Err(FlattenError::MissingInput(cli.include_dir));
    }

    let flattener = Flattener::new(cli.include_dir);
    flattener.flatten(&cli.root, &cli.guard, &cli.output)
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Inline the fixbrot header tree into one self-contained header."
)]
struct Cli {
    /// Directory against which include directives are resolved.
    #[arg(long, default_value = config::INCLUDE_DIR)]
    include_dir: PathBuf,

    /// Entry header, relative to the include directory.
    #[arg(long, default_value = config::ROOT_HEADER)]
    root: String,

    /// Destination of the amalgamated header.
    #[arg(long, default_value = config::OUTPUT_HEADER)]
    output: PathBuf,

    /// Include-guard macro wrapped around the output.
    #[arg(long, default_value = config::GUARD_MACRO)]
    guard: String,
}
