//! # dnacipher - Text to DNA transcoder
//!
//! Encodes letters and spaces as codons (DNA triplets), complements every
//! base, and decodes such sequences back into text. This is a fixed public
//! substitution table, not encryption in any security sense.
//!
//! ## Architecture
//!
//! - `codon_table`: Built-in and custom symbol/codon tables
//! - `complement`: Base pairing transform
//! - `transcoder`: Encode and decode
//! - `batch`: Many messages at once
//! - `fasta`: FASTA reading and writing for batch mode
//! - `model`: Records and interactive application state
//! - `event`: Keyboard event handling
//! - `ui`: TUI rendering with ratatui
//! - `controller`: Orchestration of the interactive loop
//! - `logging`: Logger setup

pub mod batch;
pub mod codon_table;
pub mod complement;
pub mod controller;
pub mod event;
pub mod fasta;
pub mod logging;
pub mod model;
pub mod transcoder;
pub mod ui;

pub use codon_table::{CodonTable, CollisionPolicy, ReverseCodonTable, TableError};
pub use transcoder::{decode, encode, Direction, TranscodeError, TranscodeResult, Transcoder, SENTINEL};
