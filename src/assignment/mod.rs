pub mod generator;
pub mod sequence;
