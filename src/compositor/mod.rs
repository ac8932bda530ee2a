pub mod blend;
pub mod cell;
pub mod context;
pub mod label;
pub mod layers;
