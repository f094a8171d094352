//! Batch transcoding of many messages at once.
//!
//! Plain text input is split into one record per non-empty line, named
//! `msg_1`, `msg_2`, ... FASTA input keeps its own identifiers.

use std::io::Write;

use log::debug;
use thiserror::Error;

use crate::fasta::{parse_fasta_str, write_fasta, FastaResult};
use crate::model::Record;
use crate::transcoder::{Direction, TranscodeError, Transcoder};

/// A record that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{id}: {source}")]
pub struct BatchError {
    pub id: String,
    #[source]
    pub source: TranscodeError,
}

/// Splits text into one record per non-empty line.
///
/// Line endings (`\n` or `\r\n`) are stripped; other whitespace is kept,
/// since spaces are part of the plaintext alphabet.
pub fn lines_to_records(content: &str) -> Vec<Record> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| Record::new(format!("msg_{}", i + 1), line))
        .collect()
}

/// Collects the records to transcode from an input source.
///
/// FASTA decoding reads records with their own identifiers; everything else
/// is one message per line.
pub fn input_records(content: &str, direction: Direction, fasta: bool) -> FastaResult<Vec<Record>> {
    if fasta && direction == Direction::Decode {
        parse_fasta_str(content)
    } else {
        Ok(lines_to_records(content))
    }
}

/// Writes transcoded records.
///
/// In FASTA mode, encoded sequences are wrapped at `width` bases. Decoded
/// text is never wrapped, since spaces belong to the message. Without FASTA,
/// each record is written as a single line.
pub fn write_records<W: Write>(
    writer: &mut W,
    records: &[Record],
    direction: Direction,
    fasta: bool,
    width: usize,
) -> std::io::Result<()> {
    if !fasta {
        for record in records {
            writeln!(writer, "{}", record.data)?;
        }
        return Ok(());
    }

    match direction {
        Direction::Encode => write_fasta(writer, records, width),
        Direction::Decode => write_fasta(writer, records, 0),
    }
}

/// Transcodes every record, keeping identifiers and order.
///
/// Stops at the first record that fails validation.
pub fn transcode_records(
    transcoder: &Transcoder,
    direction: Direction,
    records: &[Record],
) -> Result<Vec<Record>, BatchError> {
    let output = records
        .iter()
        .map(|record| {
            transcoder
                .apply(direction, &record.data)
                .map(|data| Record::new(record.id.clone(), data))
                .map_err(|source| BatchError {
                    id: record.id.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Batch {}: {} records", direction, output.len());
    Ok(output)
}
