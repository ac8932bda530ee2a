pub mod geometry;
pub mod plan;
pub mod sheet;
