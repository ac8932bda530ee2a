//! Printable fingerprint sheets for tabletop games
//!
//! Each player is assigned a distinct subset of trait symbols. A sheet shows
//! the player's fingerprint among decoys built from parts of it, every cell
//! composited from one image layer per symbol plus status overlays.

#![forbid(unsafe_code)]

/// Deterministic fingerprint assignment and the sequence file format
pub mod assignment;
/// Subset enumeration and seeded shuffling
pub mod combinatorics;
/// Layer blending, label rasterization and cell rendering
pub mod compositor;
/// Input/output operations, configuration and error handling
pub mod io;
/// Page geometry, decoy planning and sheet assembly
pub mod layout;
/// Trait symbols, status symbols and masks
pub mod model;

pub use io::error::{FingerprintError, Result};
