//! Inbound form submissions.
//!
//! The transport hands the flow whatever field values the browser
//! re-submitted; nothing else survives between requests. Which screen a
//! submission belongs to is recovered from the stable button names it
//! contains.

use std::collections::BTreeMap;

use puw_model::{PreferenceSubmission, Threshold};

use crate::forms::field;

/// The field values of an inbound request.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    values: BTreeMap<String, String>,
}

impl Submission {
    /// An empty submission (a fresh entry with no form posted).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a submission from field name/value pairs.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Add a field value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Whether a field was submitted. Submit buttons only appear in the
    /// values when pressed, so presence identifies the pressed button.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The submitted value for a field, if any.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Interpret this submission as the preferences form's values.
    ///
    /// Checkboxes count as set when present at all; a radio value of
    /// `all` (or anything unrecognized) maps to the match-everything
    /// threshold.
    #[must_use]
    pub fn preference_values(&self) -> PreferenceSubmission {
        PreferenceSubmission {
            suppress_all: self.contains(field::DONT_ASK),
            suppress_until_next_release: self.contains(field::NEXT_RELEASE),
            min_state: threshold(self.value(field::MIN_STATE)),
            min_type: threshold(self.value(field::MIN_TYPE)),
        }
    }
}

fn threshold<T: std::str::FromStr>(value: Option<&str>) -> Threshold<T> {
    value
        .and_then(|v| v.parse().ok())
        .map_or(Threshold::All, Threshold::AtLeast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use puw_model::{ReleaseState, ReleaseType};

    #[test]
    fn test_button_presence() {
        let submission = Submission::from_fields([("main_btn_yes", "Yes")]);
        assert!(submission.contains("main_btn_yes"));
        assert!(!submission.contains("main_btn_no"));
    }

    #[test]
    fn test_preference_values_defaults() {
        let values = Submission::empty().preference_values();
        assert!(!values.suppress_all);
        assert!(!values.suppress_until_next_release);
        assert_eq!(values.min_state, Threshold::All);
        assert_eq!(values.min_type, Threshold::All);
    }

    #[test]
    fn test_preference_values_parses_radio_selections() {
        let submission = Submission::from_fields([
            (field::DONT_ASK, "1"),
            (field::MIN_STATE, "beta"),
            (field::MIN_TYPE, "major"),
        ]);
        let values = submission.preference_values();
        assert!(values.suppress_all);
        assert_eq!(values.min_state, Threshold::AtLeast(ReleaseState::Beta));
        assert_eq!(values.min_type, Threshold::AtLeast(ReleaseType::Major));
    }

    #[test]
    fn test_all_radio_value_maps_to_bottom() {
        let submission = Submission::from_fields([(field::MIN_STATE, "all")]);
        assert_eq!(
            submission.preference_values().min_state,
            Threshold::<ReleaseState>::All
        );
    }
}
