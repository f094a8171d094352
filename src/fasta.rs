//! FASTA reading and writing for batch mode.
//!
//! Encoded messages are stored one per record:
//!
//! ```text
//! >msg_1
//! TACATGAAAAAACTG
//! >msg_2
//! TGA
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use thiserror::Error;

use crate::model::Record;

/// Default number of bases per sequence line when writing.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read FASTA input: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Empty FASTA input")]
    EmptyFile,

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("Sequence without header at line {0}")]
    SequenceWithoutHeader(usize),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Parses a FASTA file into records.
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<Vec<Record>> {
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}

/// Parses FASTA content from a reader.
///
/// Multi-line sequences are joined. The identifier is the first
/// whitespace-separated token of the header. A header with no sequence
/// lines yields an empty record (the encoding of an empty message).
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<Vec<Record>> {
    let mut records = Vec::new();
    let mut current: Option<Record> = None;

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line_number = line_idx + 1;
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }

            let id = header.split_whitespace().next().unwrap_or("");
            if id.is_empty() {
                return Err(FastaError::InvalidFormat(format!(
                    "Empty sequence identifier at line {}",
                    line_number
                )));
            }

            current = Some(Record::new(id, String::new()));
        } else {
            match current.as_mut() {
                Some(record) => record
                    .data
                    .extend(line.chars().filter(|c| !c.is_whitespace())),
                None => return Err(FastaError::SequenceWithoutHeader(line_number)),
            }
        }
    }

    if let Some(record) = current {
        records.push(record);
    }

    if records.is_empty() {
        return Err(FastaError::EmptyFile);
    }

    Ok(records)
}

/// Parses FASTA content from a string.
pub fn parse_fasta_str(content: &str) -> FastaResult<Vec<Record>> {
    parse_fasta(content.as_bytes())
}

/// Writes records as FASTA, wrapping sequences at `width` columns.
///
/// A width of 0 writes each sequence on a single line.
pub fn write_fasta<W: Write>(writer: &mut W, records: &[Record], width: usize) -> std::io::Result<()> {
    for record in records {
        writeln!(writer, ">{}", record.id)?;
        if width == 0 || record.data.len() <= width {
            writeln!(writer, "{}", record.data)?;
        } else {
            for line in textwrap::wrap(&record.data, width) {
                writeln!(writer, "{}", line)?;
            }
        }
    }
    Ok(())
}
