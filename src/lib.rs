extern crate itertools; // stable term merge
extern crate ndarray; // array storage
extern crate num_traits;

#[macro_use]
extern crate log;

pub mod array;
pub mod poly;

pub use array::{ArrayError, DoubleSubscriptedArray};
pub use poly::polynomial::Polynomial;
pub use poly::term::Term;

#[cfg(test)]
mod tests;
