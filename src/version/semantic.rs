//! Semantic version value
//!
//! Parses `MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]` into an immutable value.
//! Only the numeric triple is validated; prerelease and metadata are kept as
//! opaque text.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::{debug, trace};

use crate::version::error::VersionError;

const VERSION_DELIMITER: char = '.';
const PRERELEASE_DELIMITER: char = '-';
const METADATA_DELIMITER: char = '+';

/// A parsed semantic version
///
/// Equality and hashing are structural over all fields. Ordering is a
/// simplified rule exposed through [`SemanticVersion::compare`] rather than
/// `Ord`, because it is not antisymmetric once prereleases are involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<String>,
    metadata: Option<String>,
}

impl SemanticVersion {
    /// Parse a version string.
    ///
    /// The input is split on `.` (empty segments are skipped) and needs at
    /// least three segments. The first two must be plain non-negative
    /// integers. The third is cut at its first `-` or `+` before being read as
    /// the patch number. Prerelease and metadata are then taken from the
    /// whole input, not from the third segment.
    ///
    /// Examples:
    /// - "1.2.3" -> (1, 2, 3), no prerelease, no metadata
    /// - "1.2.3-alpha+build.5" -> (1, 2, 3), prerelease "alpha", metadata "build.5"
    /// - "1.2" -> `InvalidFormat`
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let segments: Vec<&str> = input
            .split(VERSION_DELIMITER)
            .filter(|segment| !segment.is_empty())
            .collect();

        let [major, minor, patch, ..] = segments.as_slice() else {
            debug!(
                "Rejecting {:?}: expected at least 3 segments, found {}",
                input,
                segments.len()
            );
            return Err(VersionError::InvalidFormat(input.to_string()));
        };

        let major = parse_component(input, "major", major)?;
        let minor = parse_component(input, "minor", minor)?;

        // split always yields at least one item, even for an empty segment
        let patch_digits = patch
            .split(|c: char| c == PRERELEASE_DELIMITER || c == METADATA_DELIMITER)
            .next()
            .unwrap_or_default();
        let patch = parse_component(input, "patch", patch_digits)?;

        let version = Self {
            major,
            minor,
            patch,
            prerelease: extract_prerelease(input),
            metadata: extract_metadata(input),
        };
        trace!("Parsed {:?} as {}", input, version);

        Ok(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Compare two versions by the simplified precedence rule.
    ///
    /// major, minor and patch are compared numerically in that order. When
    /// all three are equal, `self` is `Less` only if it has a prerelease and
    /// `other` does not; every other combination is `Equal`. Prerelease text
    /// and metadata never take part.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (Some(_), None) => Ordering::Less,
                _ => Ordering::Equal,
            })
    }

    /// Returns true if `self` is ordered strictly before `other`
    pub fn precedes(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

/// Accepts ASCII digits only, so signs like "+1" and "-1" are rejected.
fn parse_component(input: &str, name: &str, text: &str) -> Result<u64, VersionError> {
    let value = if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse::<u64>().ok()
    } else {
        None
    };

    value.ok_or_else(|| {
        debug!("Rejecting {:?}: {} component {:?} is not a number", input, name, text);
        VersionError::InvalidFormat(input.to_string())
    })
}

fn extract_prerelease(input: &str) -> Option<String> {
    let dash = input.find(PRERELEASE_DELIMITER)?;
    let text = match input.find(METADATA_DELIMITER) {
        None => &input[dash + 1..],
        Some(plus) if dash < plus => &input[dash + 1..plus],
        Some(_) => return None,
    };
    non_empty(text)
}

fn extract_metadata(input: &str) -> Option<String> {
    input
        .split_once(METADATA_DELIMITER)
        .and_then(|(_, metadata)| non_empty(metadata))
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "{}{}", PRERELEASE_DELIMITER, prerelease)?;
        }
        if let Some(metadata) = &self.metadata {
            write!(f, "{}{}", METADATA_DELIMITER, metadata)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
