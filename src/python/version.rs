//! Interpreter version parsing and comparison.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_VERSION_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.(\d+)(?:\.(\d+))?\s*$").unwrap());

/// A Python version.
///
/// The patch component is optional so that thresholds such as `3.7` can be
/// written without one. A missing patch compares as `0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl PythonVersion {
    /// Create a `major.minor` version.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Create a `major.minor.patch` version.
    pub const fn with_patch(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch: Some(patch),
        }
    }

    /// Extract the version from `python --version` output.
    ///
    /// Accepts output such as `Python 3.11.4` or `Python 3.13.0rc1`.
    pub fn from_banner(output: &str) -> Option<Self> {
        let caps = RE_VERSION_BANNER.captures(output)?;
        Some(Self {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            patch: caps.get(3).and_then(|m| m.as_str().parse().ok()),
        })
    }

    /// `major.minor` form, as shown to users.
    pub fn short(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Whether this version is at least `minimum`.
    pub fn satisfies(&self, minimum: &PythonVersion) -> bool {
        self >= minimum
    }

    fn key(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch.unwrap_or(0))
    }
}

impl Default for PythonVersion {
    fn default() -> Self {
        Self::new(3, 7)
    }
}

impl PartialEq for PythonVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PythonVersion {}

impl PartialOrd for PythonVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PythonVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for PythonVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid Python version '{}' (expected e.g. \"3.7\")", s);
        let caps = RE_VERSION.captures(s).ok_or_else(invalid)?;
        Ok(Self {
            major: caps[1].parse().map_err(|_| invalid())?,
            minor: caps[2].parse().map_err(|_| invalid())?,
            patch: match caps.get(3) {
                Some(m) => Some(m.as_str().parse().map_err(|_| invalid())?),
                None => None,
            },
        })
    }
}

impl TryFrom<String> for PythonVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PythonVersion> for String {
    fn from(version: PythonVersion) -> Self {
        version.to_string()
    }
}
