//! Deterministic assignment of unique trait subsets to players
//!
//! All K-subsets of the universe are enumerated in canonical order, shuffled
//! once with a generator seeded from the global seed, and handed out to
//! players `1..=P` in shuffled order. The result depends only on
//! `(N, K, P, S)`.

use crate::combinatorics::combinations::{Combinations, binomial};
use crate::combinatorics::sampling::SeededShuffler;
use crate::io::error::{Result, invalid_configuration};
use crate::model::mask::Mask;
use crate::model::symbols::Universe;

/// Parameters an assignment was generated from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignmentParameters {
    /// Universe size N
    pub universe_size: usize,
    /// Symbols per fingerprint K
    pub subset_size: usize,
    /// Number of available combinations C(N, K)
    pub combinations: u64,
    /// Number of players P
    pub population: usize,
    /// Global seed S
    pub seed: u64,
}

/// One player's fingerprint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentRecord {
    /// Player identifier, starting at 1
    pub id: usize,
    /// Assigned K-subset
    pub mask: Mask,
}

/// Complete player to fingerprint mapping
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// The whole universe, used for blank reference sheets
    pub header: Mask,
    /// Player records in id order
    pub records: Vec<AssignmentRecord>,
    /// Parameters the assignment was generated from
    pub parameters: AssignmentParameters,
}

/// Assign a distinct `subset_size`-subset of `universe` to each of `population` players
///
/// # Errors
///
/// Returns a configuration error if:
/// - `subset_size` exceeds the universe size
/// - the number of combinations overflows
/// - `population` exceeds the number of combinations
pub fn generate(
    universe: &Universe,
    subset_size: usize,
    population: usize,
    seed: u64,
) -> Result<Assignment> {
    if subset_size > universe.len() {
        return Err(invalid_configuration(
            "subset_size",
            &subset_size,
            &format!("exceeds universe size {}", universe.len()),
        ));
    }

    let available = binomial(universe.len(), subset_size).ok_or_else(|| {
        invalid_configuration(
            "subset_size",
            &subset_size,
            &"number of combinations overflows",
        )
    })?;

    if population as u64 > available {
        return Err(invalid_configuration(
            "population",
            &population,
            &format!(
                "exceeds the {available} combinations of {subset_size} out of {}",
                universe.len()
            ),
        ));
    }

    let mut subsets: Vec<Vec<char>> = Combinations::new(universe.symbols(), subset_size).collect();
    SeededShuffler::new(seed).shuffle(&mut subsets);

    let records = subsets
        .into_iter()
        .take(population)
        .enumerate()
        .map(|(index, symbols)| AssignmentRecord {
            id: index + 1,
            mask: Mask::from_distinct(symbols),
        })
        .collect();

    Ok(Assignment {
        header: universe.as_mask(),
        records,
        parameters: AssignmentParameters {
            universe_size: universe.len(),
            subset_size,
            combinations: available,
            population,
            seed,
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assignment/generator.rs"]
mod tests;
