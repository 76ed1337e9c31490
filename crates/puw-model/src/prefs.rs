//! Per-package update preferences and the prompt-suppression policy.
//!
//! Preferences are keyed by package identity and persisted by an external
//! store; this module only defines the record and the pure decision logic.
//! A record is created with everything unset on first contact with a
//! package and mutated only through an explicit, user-confirmed
//! preferences submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::release::{ReleaseInfo, ReleaseState, ReleaseType, Threshold};
use crate::version::Version;

/// Per-package prompt-suppression preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Never prompt again for this package.
    #[serde(default)]
    pub suppress_all: bool,

    /// Suppress prompts until the latest version changes again.
    #[serde(default)]
    pub suppress_until_next_release: bool,

    /// Only prompt when the release state passes this threshold.
    #[serde(default)]
    pub min_state: Threshold<ReleaseState>,

    /// Only prompt when the release type passes this threshold.
    #[serde(default)]
    pub min_type: Threshold<ReleaseType>,

    /// The latest version seen when `suppress_until_next_release` was last
    /// saved. A candidate release with this exact version is suppressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_version: Option<Version>,

    /// When this record was last saved through a confirmed submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Preferences {
    /// Decide whether the user should be prompted about a candidate release.
    ///
    /// Pure over the record and the release metadata; the caller is
    /// responsible for loading the right per-package record.
    #[must_use]
    pub fn should_prompt(&self, release: &ReleaseInfo) -> bool {
        if self.suppress_all {
            tracing::debug!(package = %release.package_name, "prompt suppressed: never ask again");
            return false;
        }

        if self.suppress_until_next_release
            && self.last_seen_version.as_ref() == Some(&release.latest_version)
        {
            tracing::debug!(
                package = %release.package_name,
                version = %release.latest_version,
                "prompt suppressed: waiting for the next release"
            );
            return false;
        }

        if !self.min_state.admits(release.release_state) {
            tracing::debug!(
                package = %release.package_name,
                state = %release.release_state,
                min_state = %self.min_state,
                "prompt suppressed: release state below threshold"
            );
            return false;
        }

        if !self.min_type.admits(release.release_type) {
            tracing::debug!(
                package = %release.package_name,
                release_type = %release.release_type,
                min_type = %self.min_type,
                "prompt suppressed: release type below threshold"
            );
            return false;
        }

        true
    }

    /// Build a new record from a preferences-form submission.
    ///
    /// The controller-owned bookkeeping fields (`last_seen_version`,
    /// `saved_at`) are carried over unchanged; the controller stamps them
    /// at save time. Applying the same submission twice yields an
    /// identical record.
    #[must_use]
    pub fn apply_submission(&self, submission: &PreferenceSubmission) -> Preferences {
        Preferences {
            suppress_all: submission.suppress_all,
            suppress_until_next_release: submission.suppress_until_next_release,
            min_state: submission.min_state,
            min_type: submission.min_type,
            last_seen_version: self.last_seen_version.clone(),
            saved_at: self.saved_at,
        }
    }
}

/// The typed values of a submitted preferences form.
///
/// A submitted radio value of `all` maps to the match-everything threshold
/// for that axis; parsing the raw field strings is the dialog layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceSubmission {
    /// "Don't ask me again" checkbox.
    pub suppress_all: bool,
    /// "Don't ask again until the next release" checkbox.
    pub suppress_until_next_release: bool,
    /// Minimum-state radio group selection.
    pub min_state: Threshold<ReleaseState>,
    /// Minimum-type radio group selection.
    pub min_type: Threshold<ReleaseType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::InstalledVersion;
    use proptest::prelude::*;

    fn release(state: ReleaseState, rtype: ReleaseType) -> ReleaseInfo {
        ReleaseInfo {
            package_name: "sample-pkg".to_string(),
            installed_version: InstalledVersion::Installed(Version::new(1, 0, 0)),
            latest_version: Version::new(1, 1, 0),
            release_date: "2026-08-01".to_string(),
            release_state: state,
            release_type: rtype,
            release_notes: String::new(),
            released_by: "maintainer".to_string(),
        }
    }

    #[test]
    fn test_default_preferences_always_prompt() {
        let prefs = Preferences::default();
        assert!(prefs.should_prompt(&release(ReleaseState::Devel, ReleaseType::Bug)));
        assert!(prefs.should_prompt(&release(ReleaseState::Stable, ReleaseType::Major)));
    }

    #[test]
    fn test_state_below_threshold_suppresses() {
        let prefs = Preferences {
            min_state: Threshold::AtLeast(ReleaseState::Stable),
            ..Default::default()
        };
        assert!(!prefs.should_prompt(&release(ReleaseState::Beta, ReleaseType::Minor)));
        assert!(prefs.should_prompt(&release(ReleaseState::Stable, ReleaseType::Minor)));
    }

    #[test]
    fn test_type_below_threshold_suppresses() {
        let prefs = Preferences {
            min_type: Threshold::AtLeast(ReleaseType::Major),
            ..Default::default()
        };
        assert!(!prefs.should_prompt(&release(ReleaseState::Stable, ReleaseType::Bug)));
        assert!(prefs.should_prompt(&release(ReleaseState::Stable, ReleaseType::Major)));
    }

    #[test]
    fn test_until_next_release_suppresses_same_version_only() {
        let prefs = Preferences {
            suppress_until_next_release: true,
            last_seen_version: Some(Version::new(1, 1, 0)),
            ..Default::default()
        };
        // Same latest version as when the preference was saved.
        assert!(!prefs.should_prompt(&release(ReleaseState::Stable, ReleaseType::Minor)));

        // A newer release prompts again.
        let mut newer = release(ReleaseState::Stable, ReleaseType::Minor);
        newer.latest_version = Version::new(1, 2, 0);
        assert!(prefs.should_prompt(&newer));
    }

    #[test]
    fn test_until_next_release_without_marker_prompts() {
        let prefs = Preferences {
            suppress_until_next_release: true,
            ..Default::default()
        };
        assert!(prefs.should_prompt(&release(ReleaseState::Stable, ReleaseType::Minor)));
    }

    #[test]
    fn test_apply_submission_is_idempotent() {
        let prefs = Preferences {
            last_seen_version: Some(Version::new(1, 1, 0)),
            ..Default::default()
        };
        let submission = PreferenceSubmission {
            suppress_all: false,
            suppress_until_next_release: true,
            min_state: Threshold::AtLeast(ReleaseState::Beta),
            min_type: Threshold::All,
        };

        let once = prefs.apply_submission(&submission);
        let twice = once.apply_submission(&submission);
        assert_eq!(once, twice);
        assert_eq!(once.min_state, Threshold::AtLeast(ReleaseState::Beta));
        assert_eq!(once.last_seen_version, Some(Version::new(1, 1, 0)));
    }

    #[test]
    fn test_preferences_serde_round_trip() {
        let prefs = Preferences {
            suppress_all: true,
            min_state: Threshold::AtLeast(ReleaseState::Beta),
            last_seen_version: Some(Version::new(2, 0, 1)),
            ..Default::default()
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let round: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(round, prefs);
    }

    #[test]
    fn test_preferences_missing_fields_default() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    fn any_state() -> impl Strategy<Value = ReleaseState> {
        proptest::sample::select(ReleaseState::ALL.to_vec())
    }

    fn any_type() -> impl Strategy<Value = ReleaseType> {
        proptest::sample::select(ReleaseType::ALL.to_vec())
    }

    fn any_state_threshold() -> impl Strategy<Value = Threshold<ReleaseState>> {
        prop_oneof![
            Just(Threshold::All),
            any_state().prop_map(Threshold::AtLeast),
        ]
    }

    fn any_type_threshold() -> impl Strategy<Value = Threshold<ReleaseType>> {
        prop_oneof![Just(Threshold::All), any_type().prop_map(Threshold::AtLeast)]
    }

    proptest! {
        #[test]
        fn prop_suppress_all_never_prompts(
            state in any_state(),
            rtype in any_type(),
            min_state in any_state_threshold(),
            min_type in any_type_threshold(),
            until_next in proptest::bool::ANY,
        ) {
            let prefs = Preferences {
                suppress_all: true,
                suppress_until_next_release: until_next,
                min_state,
                min_type,
                ..Default::default()
            };
            prop_assert!(!prefs.should_prompt(&release(state, rtype)));
        }

        #[test]
        fn prop_threshold_matches_ordering(
            state in any_state(),
            min in any_state(),
        ) {
            let threshold = Threshold::AtLeast(min);
            prop_assert_eq!(threshold.admits(state), state >= min);
        }
    }
}
