//! Version comparison utilities

use crate::constraint::{Constraint, Operator};
use crate::version::Version;

/// Comparator for comparing version strings
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Compare version1 to version2 using the given operator.
    /// Returns false when either string is not a valid semver version.
    pub fn compare(version1: &str, operator: Operator, version2: &str) -> bool {
        let (Ok(v1), Ok(v2)) = (Version::parse(version1), Version::parse(version2)) else {
            return false;
        };
        Constraint::new(operator, v2).matches(&v1)
    }
}
