// file: src/models/version.rs
// description: numeric (major, minor) release version with textual form "5.6"
// reference: ordered by major then minor, never lexically

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Release version of a document. `5.10` sorts after `5.9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Builds a version from the two captured digit groups of a heading token.
    pub(crate) fn from_components(major: &str, minor: &str) -> Option<Self> {
        Some(Self {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let (major, minor) = digits
            .split_once('.')
            .ok_or_else(|| RegistryError::InvalidVersion(s.to_string()))?;

        let is_numeric = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_numeric(major) || !is_numeric(minor) {
            return Err(RegistryError::InvalidVersion(s.to_string()));
        }

        Self::from_components(major, minor).ok_or_else(|| RegistryError::InvalidVersion(s.to_string()))
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl TryFrom<String> for Version {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
