//! Reduction and solving of polynomial equations up to degree 2.

pub mod error;
pub mod reduce;
pub mod solver;
pub mod sqrt;

pub use error::SolveError;
pub use reduce::{reduce, reduce_equation};
pub use solver::{effective_degree, solve, Solver};
pub use sqrt::sqrt;
