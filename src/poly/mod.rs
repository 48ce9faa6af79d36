pub mod polynomial;
pub mod term;
