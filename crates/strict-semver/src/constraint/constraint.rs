//! Single-operator version constraints

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::operator::{InvalidOperatorError, Operator};
use crate::version::{InvalidVersionError, Version};

/// Error type for constraint parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseConstraintError {
    #[error(transparent)]
    InvalidOperator(#[from] InvalidOperatorError),
    #[error(transparent)]
    InvalidVersion(#[from] InvalidVersionError),
}

/// A version constraint: a comparison operator applied to a version.
///
/// Examples:
///
/// ```text
///  =2.0.0 (equal to 2.0.0)
///  >2.0.0 (greater than 2.0.0)
///  <2.0.0 (less than 2.0.0)
/// >=2.0.0 (greater than or equal to 2.0.0)
/// <=2.0.0 (less than or equal to 2.0.0)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub operator: Operator,
    pub version: Version,
}

impl Constraint {
    /// Create a constraint from an operator and a version.
    pub fn new(operator: Operator, version: Version) -> Self {
        Constraint { operator, version }
    }

    /// Parse a constraint containing an operator followed by a semver
    /// string, e.g. `>=1.2.3-beta4`.
    pub fn parse(text: &str) -> Result<Self, ParseConstraintError> {
        let operator_len = text
            .find(|c: char| !matches!(c, '=' | '>' | '<'))
            .unwrap_or(text.len());
        let (operator, version) = text.split_at(operator_len);

        Ok(Constraint {
            operator: operator.parse()?,
            version: Version::parse(version)?,
        })
    }

    /// Check whether the given version satisfies the constraint.
    pub fn matches(&self, version: &Version) -> bool {
        match self.operator {
            Operator::Equal => version == &self.version,
            Operator::GreaterThan => version > &self.version,
            Operator::LessThan => version < &self.version,
            Operator::GreaterThanOrEqual => version >= &self.version,
            Operator::LessThanOrEqual => version <= &self.version,
        }
    }
}

/// The default constraint requires equality with the default version,
/// `=0.1.0`.
impl Default for Constraint {
    fn default() -> Self {
        Constraint::new(Operator::Equal, Version::default())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

impl FromStr for Constraint {
    type Err = ParseConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraint::parse(s)
    }
}
