pub mod mask;
pub mod symbols;
