//! Read-only display projection of release metadata.
//!
//! The dialogs never show raw model values directly; this adapter formats
//! every field for display, substituting the "not installed" label for the
//! never-installed sentinel. Absent text fields render as empty strings.

use crate::release::ReleaseInfo;

/// Formatted accessors over a borrowed [`ReleaseInfo`].
#[derive(Debug, Clone, Copy)]
pub struct ReleaseView<'a> {
    info: &'a ReleaseInfo,
}

impl<'a> ReleaseView<'a> {
    /// Wrap release metadata for display.
    #[must_use]
    pub fn new(info: &'a ReleaseInfo) -> Self {
        Self { info }
    }

    /// The package name.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.info.package_name
    }

    /// The installed version, or the "not installed" label.
    #[must_use]
    pub fn current_version(&self) -> String {
        self.info.installed_version.display_label()
    }

    /// The candidate release version.
    #[must_use]
    pub fn release_version(&self) -> String {
        self.info.latest_version.to_string()
    }

    /// The release date as reported by the channel.
    #[must_use]
    pub fn release_date(&self) -> &str {
        &self.info.release_date
    }

    /// The release state label.
    #[must_use]
    pub fn release_state(&self) -> &str {
        self.info.release_state.as_str()
    }

    /// The release type label.
    #[must_use]
    pub fn release_type(&self) -> &str {
        self.info.release_type.as_str()
    }

    /// The release notes text.
    #[must_use]
    pub fn release_notes(&self) -> &str {
        &self.info.release_notes
    }

    /// Who published the release.
    #[must_use]
    pub fn released_by(&self) -> &str {
        &self.info.released_by
    }
}
