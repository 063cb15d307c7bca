//! Strict Semantic Versioning 2.0.0 parsing, comparison and constraint matching
//!
//! This crate provides a pure value-type implementation of SemVer: parsing
//! of `MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]` version strings, total
//! ordering per the SemVer precedence rules, and `<operator><version>`
//! constraint matching with the `=`, `>`, `<`, `>=` and `<=` operators.

pub mod constraint;
mod comparator;
mod semver;
mod version;

pub use comparator::Comparator;
pub use constraint::{Constraint, InvalidOperatorError, Operator, ParseConstraintError};
pub use semver::Semver;
pub use version::{InvalidVersionError, Version};
