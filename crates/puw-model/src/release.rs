//! Release metadata types.
//!
//! `ReleaseState` and `ReleaseType` are totally ordered so that preference
//! thresholds ("only ask for beta or better") are plain comparisons.
//! `Threshold` adds the explicit match-everything bottom value used by the
//! preferences dialog's "All" options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::version::{InstalledVersion, Version};

/// Maturity of a candidate release: `devel < alpha < beta < stable`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseState {
    /// Development snapshot.
    Devel,
    /// Alpha release.
    Alpha,
    /// Beta release.
    Beta,
    /// Stable release.
    Stable,
}

impl ReleaseState {
    /// All states in ascending order, as offered by the preferences dialog.
    pub const ALL: [ReleaseState; 4] = [Self::Devel, Self::Alpha, Self::Beta, Self::Stable];

    /// Returns the canonical lowercase label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Devel => "devel",
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for ReleaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReleaseState {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "devel" => Ok(Self::Devel),
            "alpha" => Ok(Self::Alpha),
            "beta" => Ok(Self::Beta),
            "stable" => Ok(Self::Stable),
            _ => Err(ModelError::UnknownState(s.to_string())),
        }
    }
}

/// Nature of a candidate release: `bug < minor < major`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseType {
    /// Bug-fix release.
    Bug,
    /// Minor feature release.
    Minor,
    /// Major release.
    Major,
}

impl ReleaseType {
    /// All types in ascending order, as offered by the preferences dialog.
    pub const ALL: [ReleaseType; 3] = [Self::Bug, Self::Minor, Self::Major];

    /// Returns the canonical lowercase label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bug" => Ok(Self::Bug),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            _ => Err(ModelError::UnknownType(s.to_string())),
        }
    }
}

/// A minimum-value filter over an ordered axis, with an explicit
/// match-everything bottom value.
///
/// `All` admits every value; `AtLeast(min)` admits values `>= min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold<T> {
    /// Match everything.
    All,
    /// Match values at or above the given minimum.
    AtLeast(T),
}

// Derived `Default` would require `T: Default`; the bottom value needs no
// such bound.
impl<T> Default for Threshold<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Ord + Copy> Threshold<T> {
    /// Check whether a value passes this threshold.
    #[must_use]
    pub fn admits(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::AtLeast(min) => value >= *min,
        }
    }

    /// Returns the minimum, or `None` for the match-everything value.
    #[must_use]
    pub fn minimum(&self) -> Option<T> {
        match self {
            Self::All => None,
            Self::AtLeast(min) => Some(*min),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Threshold<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::AtLeast(min) => write!(f, "{min}"),
        }
    }
}

/// Metadata for a candidate release, as reported by the update checker.
///
/// Read-only to the dialog flow; the checker owns how it is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    /// The package this release belongs to.
    pub package_name: String,
    /// The locally installed version, or the never-installed sentinel.
    pub installed_version: InstalledVersion,
    /// The latest version available on the channel.
    pub latest_version: Version,
    /// Release date as reported by the channel.
    #[serde(default)]
    pub release_date: String,
    /// Maturity of the release.
    pub release_state: ReleaseState,
    /// Nature of the release.
    pub release_type: ReleaseType,
    /// Release notes / changelog text.
    #[serde(default)]
    pub release_notes: String,
    /// Who published the release.
    #[serde(default)]
    pub released_by: String,
}
