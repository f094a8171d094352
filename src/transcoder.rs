//! Text to codon transcoding.
//!
//! Encoding maps every symbol of the (uppercased) input to its codon and
//! complements the resulting bases. Decoding complements the input, splits it
//! into triplets and maps each triplet back to a symbol.
//!
//! ```
//! use dnacipher::{decode, encode};
//!
//! assert_eq!(encode("a").unwrap(), "TGA");
//! assert_eq!(decode("TGA").unwrap(), "A");
//! ```

use std::fmt;
use std::sync::OnceLock;

use log::trace;
use thiserror::Error;

use crate::codon_table::{
    is_base, is_symbol, CodonTable, CollisionPolicy, ReverseCodonTable, TableError, CODON_LEN,
};
use crate::complement::{complement, complement_base};

/// Placeholder emitted by decode for a triplet that maps to no symbol.
pub const SENTINEL: char = '?';

/// Errors returned by [`Transcoder::encode`] and [`Transcoder::decode`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("Only alphabetic characters and spaces allowed (found {found:?} at position {position})")]
    InvalidAlphabet { found: char, position: usize },

    #[error("Only A, T, C, G allowed in a DNA sequence (found {found:?} at position {position})")]
    InvalidSequence { found: char, position: usize },
}

/// Result type for transcoding operations.
pub type TranscodeResult<T> = Result<T, TranscodeError>;

/// Transcoding direction chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Text to DNA.
    #[default]
    Encode,
    /// DNA to text.
    Decode,
}

impl Direction {
    /// Returns the other direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Encode => Direction::Decode,
            Direction::Decode => Direction::Encode,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => write!(f, "encode"),
            Direction::Decode => write!(f, "decode"),
        }
    }
}

/// Forward and reverse codon tables bundled for transcoding.
#[derive(Debug, Clone)]
pub struct Transcoder {
    codons: CodonTable,
    reverse: ReverseCodonTable,
}

impl Transcoder {
    /// Creates a transcoder over `codons`, inverting it with `policy`.
    pub fn new(codons: CodonTable, policy: CollisionPolicy) -> Result<Self, TableError> {
        let reverse = ReverseCodonTable::build(&codons, policy)?;
        Ok(Self { codons, reverse })
    }

    /// Returns the shared transcoder over the built-in table.
    ///
    /// The reverse table uses [`CollisionPolicy::LastWins`], so the codon
    /// shared by `B` and `H` decodes as `H`.
    pub fn standard() -> &'static Transcoder {
        static STANDARD: OnceLock<Transcoder> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let codons = CodonTable::standard().clone();
            let reverse = ReverseCodonTable::build(&codons, CollisionPolicy::LastWins)
                .expect("LastWins never rejects a collision");
            Transcoder { codons, reverse }
        })
    }

    /// Returns the forward table.
    pub fn codons(&self) -> &CodonTable {
        &self.codons
    }

    /// Returns the reverse table.
    pub fn reverse(&self) -> &ReverseCodonTable {
        &self.reverse
    }

    /// Runs `input` through the given direction.
    pub fn apply(&self, direction: Direction, input: &str) -> TranscodeResult<String> {
        match direction {
            Direction::Encode => self.encode(input),
            Direction::Decode => self.decode(input),
        }
    }

    /// Encodes text (letters and spaces, any case) as complemented codons.
    pub fn encode(&self, input: &str) -> TranscodeResult<String> {
        let upper = input.to_uppercase();

        if let Some((position, found)) = upper.chars().enumerate().find(|&(_, c)| !is_symbol(c)) {
            return Err(TranscodeError::InvalidAlphabet { found, position });
        }

        let mut bases = String::with_capacity(upper.len() * CODON_LEN);
        for symbol in upper.chars() {
            // Every symbol is covered after validation.
            if let Some(codon) = self.codons.codon(symbol) {
                bases.extend(codon.chars().filter_map(complement_base));
            }
        }

        trace!("Encoded {} symbols into {} bases", upper.chars().count(), bases.len());
        Ok(bases)
    }

    /// Decodes a DNA sequence (A, C, G, T, any case) back into text.
    ///
    /// A trailing group shorter than a codon, or a triplet with no symbol,
    /// decodes as [`SENTINEL`] instead of failing.
    pub fn decode(&self, input: &str) -> TranscodeResult<String> {
        let upper = input.to_uppercase();

        if let Some((position, found)) = upper.chars().enumerate().find(|&(_, c)| !is_base(c)) {
            return Err(TranscodeError::InvalidSequence { found, position });
        }

        // Validated above: every character has a complement.
        let bases = complement(&upper).unwrap_or_default();

        let text: String = bases
            .as_bytes()
            .chunks(CODON_LEN)
            .map(|group| {
                std::str::from_utf8(group)
                    .ok()
                    .filter(|codon| codon.len() == CODON_LEN)
                    .and_then(|codon| self.reverse.symbol(codon))
                    .unwrap_or(SENTINEL)
            })
            .collect();

        trace!("Decoded {} bases into {} symbols", bases.len(), text.len());
        Ok(text)
    }
}

/// Encodes text with the built-in table.
pub fn encode(input: &str) -> TranscodeResult<String> {
    Transcoder::standard().encode(input)
}

/// Decodes a DNA sequence with the built-in table.
pub fn decode(input: &str) -> TranscodeResult<String> {
    Transcoder::standard().decode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_symbol() {
        assert_eq!(encode("A").unwrap(), "TGA");
        assert_eq!(encode(" ").unwrap(), "ATC");
    }

    #[test]
    fn test_decode_single_codon() {
        assert_eq!(decode("TGA").unwrap(), "A");
        assert_eq!(decode("ATC").unwrap(), " ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode("").unwrap(), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_encode_hello_world() {
        // H=ATG E=TAC L=TTT L=TTT O=GAC ' '=TAG W=GAG O=GAC R=AAG L=TTT D=GAA, then complemented
        assert_eq!(
            encode("hello world").unwrap(),
            "TACATGAAAAAACTGATCCTCCTGTTCAAACTT"
        );
        assert_eq!(decode("TACATGAAAAAACTGATCCTCCTGTTCAAACTT").unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(encode("Hello").unwrap(), encode("HELLO").unwrap());
        assert_eq!(decode("tga").unwrap(), "A");
        assert_eq!(decode("TgA").unwrap(), decode("TGA").unwrap());
    }

    #[test]
    fn test_invalid_alphabet() {
        assert_eq!(
            encode("1+1").unwrap_err(),
            TranscodeError::InvalidAlphabet { found: '1', position: 0 }
        );
        assert_eq!(
            encode("ab-c").unwrap_err(),
            TranscodeError::InvalidAlphabet { found: '-', position: 2 }
        );
        assert!(matches!(encode("tab\there"), Err(TranscodeError::InvalidAlphabet { .. })));
    }

    #[test]
    fn test_invalid_sequence() {
        assert_eq!(
            decode("AXTG").unwrap_err(),
            TranscodeError::InvalidSequence { found: 'X', position: 1 }
        );
        assert!(matches!(decode("ACG U"), Err(TranscodeError::InvalidSequence { found: ' ', .. })));
    }

    #[test]
    fn test_error_messages() {
        let err = encode("1").unwrap_err();
        assert!(err.to_string().contains("Only alphabetic characters and spaces allowed"));

        let err = decode("N").unwrap_err();
        assert!(err.to_string().contains("Only A, T, C, G allowed"));
    }

    #[test]
    fn test_decode_partial_trailing_group() {
        // ATCGA -> complement TAGCT -> TAG (space) + CT (incomplete)
        assert_eq!(decode("ATCGA").unwrap(), " ?");
        assert_eq!(decode("T").unwrap(), "?");
        assert_eq!(decode("TGAAC").unwrap(), "A?");
    }

    #[test]
    fn test_decode_unassigned_codon() {
        // GGG complements to CCC, which no symbol uses
        assert_eq!(decode("GGG").unwrap(), "?");
        assert_eq!(decode("TGAGGGTGA").unwrap(), "A?A");
    }

    #[test]
    fn test_round_trip_without_collision() {
        let text = "The quick fox jumps over a lazy dog";
        assert_eq!(decode(&encode(text).unwrap()).unwrap(), text.to_uppercase());
    }

    #[test]
    fn test_colliding_symbols_decode_as_last() {
        // B and H share ATG; the reverse table keeps H
        assert_eq!(encode("B").unwrap(), encode("H").unwrap());
        assert_eq!(decode(&encode("BH").unwrap()).unwrap(), "HH");
    }

    #[test]
    fn test_first_wins_transcoder() {
        let transcoder =
            Transcoder::new(CodonTable::standard().clone(), CollisionPolicy::FirstWins).unwrap();
        assert_eq!(transcoder.decode(&transcoder.encode("BH").unwrap()).unwrap(), "BB");
    }

    #[test]
    fn test_reject_policy_on_standard_table() {
        let result = Transcoder::new(CodonTable::standard().clone(), CollisionPolicy::Reject);
        assert!(matches!(result, Err(TableError::CodonCollision { .. })));
    }

    #[test]
    fn test_apply_direction() {
        let transcoder = Transcoder::standard();
        assert_eq!(transcoder.apply(Direction::Encode, "a").unwrap(), "TGA");
        assert_eq!(transcoder.apply(Direction::Decode, "TGA").unwrap(), "A");
        assert_eq!(Direction::Encode.toggled(), Direction::Decode);
        assert_eq!(Direction::Decode.to_string(), "decode");
    }
}
