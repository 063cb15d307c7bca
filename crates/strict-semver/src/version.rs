//! Version parsing and ordering per SemVer 2.0.0

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a version string is not in semver format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid version string \"{0}\"")]
pub struct InvalidVersionError(pub String);

/// A version number in semver format.
///
/// Ordering follows SemVer 2.0.0 precedence: the numeric triple decides
/// first, then pre-release identifiers. Build metadata never participates
/// in comparisons, so `1.0.0+build1 == 1.0.0+build2`.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Vec<String>,
    pub metadata: Vec<String>,
}

impl Version {
    /// Create a version from a numeric triple, with no pre-release or
    /// build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Parse a semver string.
    ///
    /// Pre-release and metadata are optional and have to be provided in
    /// that order, e.g. `1.2.3-beta4+20150505`. Numeric segments must not
    /// carry leading zeroes.
    pub fn parse(text: &str) -> Result<Self, InvalidVersionError> {
        let mut segments = text.splitn(3, '.');
        let (Some(major), Some(minor), Some(rest)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(InvalidVersionError(text.to_string()));
        };

        // Metadata is stripped before the pre-release marker is searched,
        // so a '-' inside the metadata suffix is not taken for one.
        let (rest, metadata) = split_suffix(rest, '+');
        let (patch, pre_release) = split_suffix(rest, '-');

        Ok(Version {
            major: parse_numeric(text, major)?,
            minor: parse_numeric(text, minor)?,
            patch: parse_numeric(text, patch)?,
            pre_release,
            metadata,
        })
    }

    /// Return the major, minor and patch values as a tuple.
    pub fn as_triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    fn compare_pre_release(&self, other: &Self) -> Ordering {
        match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
            (true, true) => return Ordering::Equal,
            // A release outranks any pre-release of the same triple.
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        for (ours, theirs) in self.pre_release.iter().zip(&other.pre_release) {
            // A successful integer parse is the sole numeric criterion;
            // "007" orders as 7 here even though it could not appear in a
            // freshly parsed numeric segment.
            let ordering = match (ours.parse::<u64>(), theirs.parse::<u64>()) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => ours.cmp(theirs),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        self.pre_release.len().cmp(&other.pre_release.len())
    }
}

/// The default version is `0.1.0`, matching the convention of a project
/// that has not yet reached 1.0.
impl Default for Version {
    fn default() -> Self {
        Version::new(0, 1, 0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.compare_pre_release(other))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = join_alphanumeric(&self.pre_release) {
            write!(f, "-{}", pre_release)?;
        }
        if let Some(metadata) = join_alphanumeric(&self.metadata) {
            write!(f, "+{}", metadata)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = InvalidVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

/// Split `segment` at the first occurrence of `marker` and break the tail
/// into dot-separated identifiers. Without the marker the identifier list
/// is empty.
fn split_suffix(segment: &str, marker: char) -> (&str, Vec<String>) {
    match segment.split_once(marker) {
        Some((head, tail)) => (head, tail.split('.').map(str::to_owned).collect()),
        None => (segment, Vec::new()),
    }
}

fn parse_numeric(text: &str, segment: &str) -> Result<u64, InvalidVersionError> {
    if segment.len() > 1 && segment.starts_with('0') {
        return Err(InvalidVersionError(text.to_string()));
    }
    segment
        .parse()
        .map_err(|_| InvalidVersionError(text.to_string()))
}

/// Join identifiers for display. A joined string containing anything other
/// than ASCII alphanumerics or '-' suppresses the whole suffix instead of
/// rendering malformed data.
fn join_alphanumeric(identifiers: &[String]) -> Option<String> {
    if identifiers.is_empty() {
        return None;
    }
    let joined = identifiers.join(".");
    if joined.is_empty() || !joined.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    Some(joined)
}
