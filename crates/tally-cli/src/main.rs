use clap::Parser;
use std::path::PathBuf;

use tally_core::error::TallyError;
use tally_core::extraction::default_extractor;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Count the whitespace-delimited words in a PDF"
)]
struct Cli {
    /// Path to the PDF file
    #[arg(value_name = "FILE")]
    input_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(input_file: PathBuf) -> Result<(), TallyError> {
    let extractor = default_extractor();
    let total = tally_core::count_words(&input_file, extractor.as_ref())?;
    println!("Total number of words in the PDF: {total}");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.input_file) {
        log::debug!("failure kind: {:?}", e.kind());
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
