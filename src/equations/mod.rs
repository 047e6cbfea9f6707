//! Equation detection and the equation record returned to scoring.

pub mod equation;
pub mod detector;

pub use equation::{Equation, Step};
pub use detector::detect;
