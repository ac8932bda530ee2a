//! Trait universe and status symbols shared by every pipeline
//!
//! Every symbol names one layer image. Universe symbols are the traits a
//! player's fingerprint is built from; status symbols decorate a cell
//! according to how much of a genuine fingerprint it shows.

use crate::io::error::{Result, invalid_configuration};
use crate::model::mask::Mask;

/// First universe symbol; the rest follow alphabetically
pub const BASE_CHAR: char = 'A';

/// Largest universe that fits in consecutive uppercase letters
pub const MAX_UNIVERSE_SIZE: usize = 26;

/// Layers that decorate a cell beyond its traits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusSymbol {
    /// Common background drawn under every status marker
    Background,
    /// Marks a cell showing a complete fingerprint
    Full,
    /// Marks a cell showing part of a fingerprint
    Part,
    /// Floods a cell showing more traits than any player has
    Mask,
}

impl StatusSymbol {
    /// All status symbols in layer roster order
    pub const ALL: [Self; 4] = [Self::Background, Self::Full, Self::Part, Self::Mask];

    /// Character naming this layer
    pub const fn symbol(self) -> char {
        match self {
            Self::Background => '@',
            Self::Full => '$',
            Self::Part => '&',
            Self::Mask => '#',
        }
    }

    /// Status symbol named by a character, if any
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.symbol() == symbol)
    }
}

/// Fixed ordered set of trait symbols
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Universe {
    symbols: Vec<char>,
}

impl Universe {
    /// Universe of `size` consecutive letters starting at [`BASE_CHAR`]
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `size` is zero or exceeds [`MAX_UNIVERSE_SIZE`]
    pub fn alphabetic(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_UNIVERSE_SIZE {
            return Err(invalid_configuration(
                "universe_size",
                &size,
                &format!("must be between 1 and {MAX_UNIVERSE_SIZE}"),
            ));
        }

        let symbols = (BASE_CHAR..).take(size).collect();
        Ok(Self { symbols })
    }

    /// Number of trait symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the universe has no symbols (never true once constructed)
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Trait symbols in canonical order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Whether `symbol` is one of the trait symbols
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// The whole universe as a mask, used for reference sheets
    pub fn as_mask(&self) -> Mask {
        Mask::from_distinct(self.symbols.clone())
    }

    /// Every layer symbol: status symbols followed by the traits
    pub fn all_layers(&self) -> Vec<char> {
        StatusSymbol::ALL
            .iter()
            .map(|status| status.symbol())
            .chain(self.symbols.iter().copied())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/symbols.rs"]
mod tests;
