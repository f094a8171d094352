//! dnacipher - Text to DNA transcoder
//!
//! ## Usage
//!
//! ```bash
//! dnacipher "hello world"              # Encode a message
//! dnacipher -d TACATGAAAAAACTG         # Decode a sequence
//! dnacipher -i notes.txt --fasta -o notes.fa
//! dnacipher -d -i notes.fa --fasta     # Decode every record
//! dnacipher                            # Interactive terminal UI
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use dnacipher::batch::{input_records, transcode_records, write_records};
use dnacipher::controller::run_app;
use dnacipher::fasta::DEFAULT_LINE_WIDTH;
use dnacipher::logging::{self, LogTarget};
use dnacipher::model::{AppState, Record};
use dnacipher::ui::glyphs;
use dnacipher::{Direction, Transcoder};

/// dnacipher - Encode text as DNA codons and decode it back
///
/// Without TEXT or -i/--input, opens an interactive terminal UI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Message to encode (letters and spaces) or sequence to decode (A, C, G, T)
    text: Option<String>,

    /// Decode DNA into text instead of encoding text into DNA
    #[arg(short = 'd', long = "decode")]
    decode: bool,

    /// Read input from a file, one message per line. Use "-" for stdin.
    #[arg(short = 'i', long = "input", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Write encoded messages as FASTA records, or read sequences to decode from FASTA
    #[arg(long = "fasta")]
    fasta: bool,

    /// Bases per line in FASTA output (0 = no wrapping)
    #[arg(short = 'w', long = "width", default_value_t = DEFAULT_LINE_WIDTH)]
    width: usize,

    /// Pause before an interactive operation runs, in milliseconds
    #[arg(long = "delay-ms", default_value_t = 800)]
    delay_ms: u64,

    /// Use Unicode glyphs in the interactive UI
    #[arg(long = "fancy")]
    fancy: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn direction(&self) -> Direction {
        if self.decode {
            Direction::Decode
        } else {
            Direction::Encode
        }
    }

    fn is_interactive(&self) -> bool {
        self.text.is_none() && self.input.is_none()
    }
}

/// Reads the whole input source.
fn read_input(path: &PathBuf) -> Result<String> {
    let mut content = String::new();
    if path.as_os_str() == "-" {
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
    } else {
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut content))
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }
    Ok(content)
}

/// Runs CLI mode: collect records, transcode them, and write them out.
fn run_cli_mode(args: &Args) -> Result<()> {
    let direction = args.direction();

    // TEXT and -i conflict, and interactive mode handles neither
    let records = match &args.input {
        Some(path) => input_records(&read_input(path)?, direction, args.fasta)?,
        None => vec![Record::new("msg_1", args.text.as_deref().unwrap_or_default())],
    };
    info!("Loaded {} records", records.len());

    let output = transcode_records(Transcoder::standard(), direction, &records)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    write_records(&mut writer, &output, direction, args.fasta, args.width)?;
    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Wrote {} records to {}", output.len(), path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.fasta && args.decode && args.text.is_some() {
        anyhow::bail!("--fasta decoding reads records from -i/--input, not from TEXT");
    }

    if args.is_interactive() {
        // Only leave a log file behind when logging was asked for
        let log_path = if args.verbose > 0 || std::env::var_os("RUST_LOG").is_some() {
            logging::init(args.verbose, LogTarget::TempFile)?
        } else {
            None
        };
        let state = AppState::new(Duration::from_millis(args.delay_ms));
        run_app(state, glyphs::select(args.fancy))?;
        if let Some(path) = log_path {
            eprintln!("Log written to {}", path.display());
        }
    } else {
        logging::init(args.verbose, LogTarget::Stderr)?;
        run_cli_mode(&args)?;
    }

    Ok(())
}
