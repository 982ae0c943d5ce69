use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_router::requests::{self, RequestError};

/// Answer transit network queries from a JSON request document.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Request document to read (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the answers (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with the answers
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RequestError> {
    let input = requests::open_input(args.input.as_deref())?;

    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let answered = requests::process(input, output, args.pretty)?;
    info!(answered, "Done");
    Ok(())
}
