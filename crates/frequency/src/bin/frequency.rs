//! `frequency` — print the most frequent words of a text file.
//!
//! Usage:
//!   frequency --file <path> [--min-chars <n>] [--top <n>] [-v]
//!
//! Try it with a sample such as `tale.txt` from
//! <https://introcs.cs.princeton.edu/java/data/>.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use frequency::{count_file, write_report, FrequencyError};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Debug, Parser)]
#[command(name = "frequency", about = "Tally word frequencies of a text file")]
struct Args {
    /// Path to the input file.
    #[arg(long)]
    file: PathBuf,
    /// Minimum number of characters a word needs to be counted.
    #[arg(long, default_value_t = 4)]
    min_chars: usize,
    /// Number of most frequent words to print.
    #[arg(long, default_value_t = 1)]
    top: usize,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Only fails if a logger is already installed.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), FrequencyError> {
    let tally = count_file(&args.file, args.min_chars)?;
    write_report(&tally, args.top, out)?;
    out.flush()?;
    Ok(())
}
