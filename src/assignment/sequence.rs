//! Line-oriented sequence file format
//!
//! ```text
//! # Fingerprints for Games Generator
//! # N=14  K=7  C=3432  P=200  S=518
//! blank ABCDEFGHIJKLMN
//! 001 GHIJKLN
//! ```
//!
//! Comment lines start with [`COMMENT_MARKER`]; blank lines are ignored.
//! Every other line holds an identifier and a mask separated by whitespace.

use crate::assignment::generator::Assignment;
use crate::io::configuration::TITLE;
use crate::io::error::{FingerprintError, Result, malformed_record};
use crate::model::mask::Mask;
use std::io::Write;
use std::path::Path;

/// Prefix of lines ignored by the parser
pub const COMMENT_MARKER: char = '#';

/// Identifier of the header record mapping to the whole universe
pub const BLANK_ID: &str = "blank";

/// One parsed sequence file entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    /// One-based line number in the source text
    pub line: usize,
    /// Sheet identifier, numeric for players
    pub id: String,
    /// Mask to render
    pub mask: Mask,
}

/// Write an assignment as a sequence file
///
/// Player ids are zero-padded to the width of the population size.
///
/// # Errors
///
/// Returns a file system error if the writer fails
pub fn write_sequence<W: Write>(assignment: &Assignment, writer: &mut W) -> Result<()> {
    let parameters = &assignment.parameters;
    let width = parameters.population.to_string().len();

    writeln!(writer, "{COMMENT_MARKER} {TITLE}")?;
    writeln!(
        writer,
        "{COMMENT_MARKER} N={}  K={}  C={}  P={}  S={}",
        parameters.universe_size,
        parameters.subset_size,
        parameters.combinations,
        parameters.population,
        parameters.seed
    )?;
    writeln!(writer, "{BLANK_ID} {}", assignment.header)?;
    for record in &assignment.records {
        writeln!(writer, "{:0width$} {}", record.id, record.mask)?;
    }
    Ok(())
}

/// Parse a single line, returning `None` for comments and blank lines
///
/// # Errors
///
/// Returns a malformed record error if the line does not hold exactly an id
/// and a valid mask
pub fn parse_line(line_number: usize, line: &str) -> Option<Result<SequenceRecord>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
        return None;
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    let record = match fields.as_slice() {
        [id, mask] => mask
            .parse::<Mask>()
            .map(|mask| SequenceRecord {
                line: line_number,
                id: (*id).to_string(),
                mask,
            })
            .map_err(|error| error.at_line(line_number)),
        _ => Err(malformed_record(
            line_number,
            trimmed,
            &format!("expected an id and a mask, found {} fields", fields.len()),
        )),
    };
    Some(record)
}

/// Parse sequence text into per-line results
///
/// A malformed line produces an error for that line only; the remaining
/// records are still returned.
pub fn parse_sequence(text: &str) -> Vec<Result<SequenceRecord>> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

/// Read and parse a sequence file
///
/// # Errors
///
/// Returns a file system error if the file cannot be read
pub fn read_sequence_file(path: &Path) -> Result<Vec<Result<SequenceRecord>>> {
    let text = std::fs::read_to_string(path).map_err(|e| FingerprintError::FileSystem {
        path: path.to_path_buf(),
        operation: "read sequence file",
        source: e,
    })?;
    Ok(parse_sequence(&text))
}

#[cfg(test)]
#[path = "../../tests/unit/assignment/sequence.rs"]
mod tests;
