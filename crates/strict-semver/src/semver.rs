//! Semver facade providing high-level version operations

use crate::constraint::Constraint;
use crate::version::Version;

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint. Returns false when
    /// either the version or the constraint fails to parse.
    pub fn satisfies(version: &str, constraint: &str) -> bool {
        let Ok(version) = Version::parse(version) else {
            return false;
        };
        let Ok(constraint) = Constraint::parse(constraint) else {
            return false;
        };
        constraint.matches(&version)
    }

    /// Return all versions that satisfy the given constraint, in input
    /// order. Unparseable versions are skipped.
    pub fn satisfied_by(versions: &[&str], constraint: &str) -> Vec<String> {
        let Ok(constraint) = Constraint::parse(constraint) else {
            return Vec::new();
        };

        versions
            .iter()
            .filter_map(|raw| {
                let version = Version::parse(raw).ok()?;
                constraint.matches(&version).then(|| raw.to_string())
            })
            .collect()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Track each entry's input index so equal versions stay in input
        // order and the caller gets their own spelling back.
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, raw)| Version::parse(raw).ok().map(|v| (v, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let ordering = a.cmp(b);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies_positive() {
        assert!(Semver::satisfies("1.0.0", "=1.0.0"));
        assert!(Semver::satisfies("1.0.0+build5", "=1.0.0"));
        assert!(Semver::satisfies("1.0.0", ">=1.0.0"));
        assert!(Semver::satisfies("1.0.1", ">=1.0.0"));
        assert!(Semver::satisfies("1.1.0", ">1.0.0"));
        assert!(Semver::satisfies("2.0.0", "<=2.0.0"));
        assert!(Semver::satisfies("1.9999.9999", "<2.0.0"));
        assert!(Semver::satisfies("0.2.9", "<2.0.0"));
        assert!(Semver::satisfies("1.2.3-beta4", ">=1.2.3-beta4"));
        assert!(Semver::satisfies("1.2.3-alpha", "<1.2.3"));
    }

    #[test]
    fn test_satisfies_negative() {
        assert!(!Semver::satisfies("1.0.1", "=1.0.0"));
        assert!(!Semver::satisfies("0.1.0", ">=1.0.0"));
        assert!(!Semver::satisfies("1.0.0", ">1.0.0"));
        assert!(!Semver::satisfies("3.0.0", "<=2.0.0"));
        assert!(!Semver::satisfies("2.0.0", "<2.0.0"));
        assert!(!Semver::satisfies("1.2.3-alpha", ">=1.2.3"));
    }

    #[test]
    fn test_satisfies_malformed_input() {
        // Parse failures never match and never error out.
        assert!(!Semver::satisfies("1.0", ">=1.0.0"));
        assert!(!Semver::satisfies("1.0.0", ">=1.0"));
        assert!(!Semver::satisfies("1.0.0", "^1.0.0"));
        assert!(!Semver::satisfies("1.0.0", "1.0.0"));
        assert!(!Semver::satisfies("1.0.0", "<>1.0.0"));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = ["1.0.0", "1.2.0", "1.9999.9999", "2.0.0", "2.1.0", "0.9999.9999"];
        let result = Semver::satisfied_by(&versions, ">=1.2.0");
        assert_eq!(result, vec!["1.2.0", "1.9999.9999", "2.0.0", "2.1.0"]);
    }

    #[test]
    fn test_satisfied_by_skips_unparseable() {
        let versions = ["1.0.0", "dev-master", "2.0.0", "1.5"];
        let result = Semver::satisfied_by(&versions, ">=1.0.0");
        assert_eq!(result, vec!["1.0.0", "2.0.0"]);

        assert!(Semver::satisfied_by(&versions, "~1.0").is_empty());
    }

    #[test]
    fn test_sort() {
        let versions = ["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(
            sorted,
            vec!["0.1.0", "0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "3.2.1"]
        );
    }

    #[test]
    fn test_sort_drops_unparseable() {
        let versions = ["dev-foo", "1.0.0", "50.2.0", "1.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, vec!["1.0.0", "50.2.0"]);
    }

    #[test]
    fn test_rsort() {
        let versions = ["1.0.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(
            rsorted,
            vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0"]
        );
    }

    #[test]
    fn test_sort_pre_release_identifiers() {
        let versions = [
            "1.0.0",
            "1.0.0-alpha.10",
            "1.0.0-alpha.9",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
        ];
        let sorted = Semver::sort(&versions);
        assert_eq!(
            sorted,
            vec![
                "1.0.0-alpha.9",
                "1.0.0-alpha.10",
                "1.0.0-alpha.beta",
                "1.0.0-beta",
                "1.0.0",
            ]
        );
    }
}
