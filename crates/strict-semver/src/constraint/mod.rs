//! Constraint types for version matching

mod constraint;
mod operator;

pub use constraint::{Constraint, ParseConstraintError};
pub use operator::{InvalidOperatorError, Operator};
