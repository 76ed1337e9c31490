//! Version parsing and comparison for update prompts.
//!
//! Handles version strings as reported by release channels (e.g., "1.2.0",
//! "v0.9.4") and the "never installed" sentinel for packages that exist on
//! the channel but were not installed locally.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Label shown in place of a version number for packages that were never
/// installed. The sentinel must never render as a raw version string.
pub const NOT_INSTALLED_LABEL: &str = "not installed";

/// A release version in `major.minor.patch` form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Version {
    /// Major version number.
    pub major: u32,
    /// Minor version number.
    pub minor: u32,
    /// Patch version number.
    pub patch: u32,
}

impl Version {
    /// Create a new version.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for Version {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_prefix('v').unwrap_or(s);

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(ModelError::InvalidVersion(s.to_string()));
        }

        let major = parts[0]
            .parse()
            .map_err(|_| ModelError::InvalidVersion(s.to_string()))?;
        let minor = parts[1]
            .parse()
            .map_err(|_| ModelError::InvalidVersion(s.to_string()))?;
        let patch = parts[2]
            .parse()
            .map_err(|_| ModelError::InvalidVersion(s.to_string()))?;

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => {}
            other => return other,
        }
        match self.minor.cmp(&other.minor) {
            Ordering::Equal => {}
            other => return other,
        }
        self.patch.cmp(&other.patch)
    }
}

/// The locally installed version of a package, or the explicit sentinel for
/// a package that was never installed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstalledVersion {
    /// The package has never been installed locally.
    #[default]
    NotInstalled,
    /// The package is installed at this version.
    Installed(Version),
}

impl InstalledVersion {
    /// Returns the installed version, if any.
    #[must_use]
    pub fn version(&self) -> Option<&Version> {
        match self {
            Self::NotInstalled => None,
            Self::Installed(v) => Some(v),
        }
    }

    /// Returns true for the never-installed sentinel.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed(_))
    }

    /// The display text for this value: the version number, or the
    /// "not installed" label for the sentinel.
    #[must_use]
    pub fn display_label(&self) -> String {
        match self {
            Self::NotInstalled => NOT_INSTALLED_LABEL.to_string(),
            Self::Installed(v) => v.to_string(),
        }
    }
}

impl fmt::Display for InstalledVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        let v = Version::from_str("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_parse_version_with_v_prefix() {
        let v = Version::from_str("v1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_ordering() {
        let v1 = Version::from_str("1.0.0").unwrap();
        let v2 = Version::from_str("1.0.1").unwrap();
        let v3 = Version::from_str("1.1.0").unwrap();
        let v4 = Version::from_str("2.0.0").unwrap();

        assert!(v1 < v2);
        assert!(v2 < v3);
        assert!(v3 < v4);
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_invalid_version() {
        assert!(Version::from_str("invalid").is_err());
        assert!(Version::from_str("1.2").is_err());
        assert!(Version::from_str("1.2.3.4").is_err());
    }

    #[test]
    fn test_not_installed_never_shows_a_number() {
        let none = InstalledVersion::NotInstalled;
        assert_eq!(none.display_label(), NOT_INSTALLED_LABEL);
        assert!(none.version().is_none());
        assert!(!none.is_installed());
    }

    #[test]
    fn test_installed_shows_version() {
        let v = InstalledVersion::Installed(Version::new(0, 9, 4));
        assert_eq!(v.display_label(), "0.9.4");
        assert!(v.is_installed());
    }
}
