//! Ordered sets of distinct trait symbols

use crate::io::error::{Result, malformed_record};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of distinct symbols
///
/// A mask of exactly K symbols is a player's fingerprint; shorter masks are
/// decoys and longer ones are reference renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mask {
    symbols: Vec<char>,
}

impl Mask {
    /// Build a mask, rejecting repeated or whitespace symbols
    ///
    /// # Errors
    ///
    /// Returns a malformed record error if a symbol repeats or is whitespace
    pub fn new(symbols: Vec<char>) -> Result<Self> {
        let text: String = symbols.iter().collect();
        for (index, symbol) in symbols.iter().enumerate() {
            if symbol.is_whitespace() {
                return Err(malformed_record(0, &text, &"mask contains whitespace"));
            }
            if symbols.get(..index).is_some_and(|seen| seen.contains(symbol)) {
                return Err(malformed_record(
                    0,
                    &text,
                    &format!("symbol '{symbol}' repeats"),
                ));
            }
        }
        Ok(Self { symbols })
    }

    // Callers guarantee distinctness (combinations of a mask, the universe)
    pub(crate) const fn from_distinct(symbols: Vec<char>) -> Self {
        Self { symbols }
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the mask has no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in mask order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl FromStr for Mask {
    type Err = crate::io::error::FingerprintError;

    fn from_str(text: &str) -> Result<Self> {
        Self::new(text.chars().collect())
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|symbol| write!(f, "{symbol}"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/mask.rs"]
mod tests;
