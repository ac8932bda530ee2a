pub mod combinations;
pub mod sampling;
