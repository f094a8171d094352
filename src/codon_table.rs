//! Codon table definitions.
//!
//! This module provides:
//! - The built-in symbol to codon table (A-Z and space)
//! - Validated construction of custom tables
//! - The reverse (codon to symbol) table with an explicit collision policy
//!
//! ## Known collision
//!
//! The built-in table assigns `ATG` to both `B` and `H`. It is kept as is,
//! so decoding `ATG` can only ever recover one of the two symbols. Use
//! [`CodonTable::collisions`] to inspect this, or build a custom table.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;
use thiserror::Error;

/// Number of symbols a complete table covers (A-Z plus space).
pub const SYMBOL_COUNT: usize = 27;

/// Length of a codon in bases.
pub const CODON_LEN: usize = 3;

/// Built-in symbol to codon assignments.
const STANDARD_ENTRIES: [(char, &str); SYMBOL_COUNT] = [
    ('A', "ACT"), ('B', "ATG"), ('C', "CGA"), ('D', "GAA"), ('E', "TAC"),
    ('F', "GTC"), ('G', "TGC"), ('H', "ATG"), ('I', "CCA"), ('J', "GTT"),
    ('K', "GGA"), ('L', "TTT"), ('M', "GTA"), ('N', "AGG"), ('O', "GAC"),
    ('P', "CGC"), ('Q', "TGA"), ('R', "AAG"), ('S', "TCA"), ('T', "GCG"),
    ('U', "AAA"), ('V', "TGT"), ('W', "GAG"), ('X', "GAT"), ('Y', "CTC"),
    ('Z', "ACC"), (' ', "TAG"),
];

/// Returns true if `c` belongs to the plaintext alphabet (uppercase A-Z or space).
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_uppercase() || c == ' '
}

/// Returns true if `c` is one of the four DNA bases (uppercase).
pub fn is_base(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T')
}

/// Errors that can occur while building codon tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Symbol {0:?} has no codon")]
    MissingSymbol(char),

    #[error("Symbol {0:?} is not an uppercase letter or space")]
    UnexpectedSymbol(char),

    #[error("Symbol {0:?} is assigned more than once")]
    DuplicateSymbol(char),

    #[error("Invalid codon {codon:?} for symbol {symbol:?}: expected 3 bases from A, C, G, T")]
    InvalidCodon { symbol: char, codon: String },

    #[error("Codon {codon} is shared by symbols {first:?} and {second:?}")]
    CodonCollision { codon: String, first: char, second: char },
}

/// Two symbols sharing the same codon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub codon: String,
    /// Symbols in table order.
    pub symbols: Vec<char>,
}

/// Immutable mapping from plaintext symbol to codon.
#[derive(Debug, Clone)]
pub struct CodonTable {
    /// Entries in insertion order; the order decides collision resolution.
    entries: Vec<(char, String)>,
    index: HashMap<char, usize>,
}

impl CodonTable {
    /// Builds a table from `(symbol, codon)` pairs.
    ///
    /// Every symbol in A-Z and space must appear exactly once, and every codon
    /// must be three bases. Codons are uppercased. Codon uniqueness is not
    /// required here; it is decided by the [`CollisionPolicy`] used to build
    /// the reverse table.
    pub fn new<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        let mut table = Vec::with_capacity(SYMBOL_COUNT);
        let mut index = HashMap::with_capacity(SYMBOL_COUNT);

        for (symbol, codon) in entries {
            if !is_symbol(symbol) {
                return Err(TableError::UnexpectedSymbol(symbol));
            }
            let codon = codon.as_ref().to_uppercase();
            if codon.chars().count() != CODON_LEN || !codon.chars().all(is_base) {
                return Err(TableError::InvalidCodon { symbol, codon });
            }
            if index.insert(symbol, table.len()).is_some() {
                return Err(TableError::DuplicateSymbol(symbol));
            }
            table.push((symbol, codon));
        }

        if let Some(missing) = ('A'..='Z').chain([' ']).find(|c| !index.contains_key(c)) {
            return Err(TableError::MissingSymbol(missing));
        }

        Ok(Self { entries: table, index })
    }

    /// Returns the built-in table, shared by the whole process.
    pub fn standard() -> &'static CodonTable {
        static STANDARD: OnceLock<CodonTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut index = HashMap::with_capacity(SYMBOL_COUNT);
            let entries = STANDARD_ENTRIES
                .iter()
                .enumerate()
                .map(|(i, &(symbol, codon))| {
                    index.insert(symbol, i);
                    (symbol, codon.to_string())
                })
                .collect();
            debug!("Built standard codon table ({} symbols)", SYMBOL_COUNT);
            CodonTable { entries, index }
        })
    }

    /// Looks up the codon for a symbol (expects uppercase).
    pub fn codon(&self, symbol: char) -> Option<&str> {
        self.index
            .get(&symbol)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Iterates over `(symbol, codon)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.entries.iter().map(|(s, c)| (*s, c.as_str()))
    }

    /// Returns the number of entries (always 27 for a valid table).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lists every codon assigned to more than one symbol.
    pub fn collisions(&self) -> Vec<Collision> {
        let mut by_codon: Vec<Collision> = Vec::new();
        for (symbol, codon) in self.iter() {
            match by_codon.iter_mut().find(|c| c.codon == codon) {
                Some(existing) => existing.symbols.push(symbol),
                None => by_codon.push(Collision {
                    codon: codon.to_string(),
                    symbols: vec![symbol],
                }),
            }
        }
        by_codon.retain(|c| c.symbols.len() > 1);
        by_codon
    }

    /// Returns true if every symbol has a distinct codon.
    pub fn is_injective(&self) -> bool {
        self.collisions().is_empty()
    }
}

/// How to resolve a codon shared by several symbols when inverting a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// The first symbol in table order keeps the codon.
    FirstWins,
    /// The last symbol in table order keeps the codon.
    #[default]
    LastWins,
    /// Refuse to build the reverse table.
    Reject,
}

/// Mapping from codon back to plaintext symbol.
#[derive(Debug, Clone)]
pub struct ReverseCodonTable {
    symbols: HashMap<String, char>,
}

impl ReverseCodonTable {
    /// Inverts a codon table using the given collision policy.
    pub fn build(table: &CodonTable, policy: CollisionPolicy) -> Result<Self, TableError> {
        let mut symbols: HashMap<String, char> = HashMap::with_capacity(table.len());

        for (symbol, codon) in table.iter() {
            match symbols.get(codon).copied() {
                None => {
                    symbols.insert(codon.to_string(), symbol);
                }
                Some(first) => match policy {
                    CollisionPolicy::FirstWins => {
                        debug!("Codon {} kept for {:?}, dropping {:?}", codon, first, symbol);
                    }
                    CollisionPolicy::LastWins => {
                        debug!("Codon {} reassigned from {:?} to {:?}", codon, first, symbol);
                        symbols.insert(codon.to_string(), symbol);
                    }
                    CollisionPolicy::Reject => {
                        return Err(TableError::CodonCollision {
                            codon: codon.to_string(),
                            first,
                            second: symbol,
                        });
                    }
                },
            }
        }

        Ok(Self { symbols })
    }

    /// Looks up the symbol for a codon (expects uppercase).
    pub fn symbol(&self, codon: &str) -> Option<char> {
        self.symbols.get(codon).copied()
    }

    /// Returns the number of distinct codons.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
