//! Release metadata and per-package update preferences.
//!
//! This crate holds the data model behind the update-prompt dialogs:
//!
//! - [`Version`] and the [`InstalledVersion`] never-installed sentinel
//! - [`ReleaseState`] / [`ReleaseType`], totally ordered, with the
//!   [`Threshold`] match-everything bottom value used by preference filters
//! - [`ReleaseInfo`], the read-only metadata reported by an update checker
//! - [`Preferences`], the per-package suppression record, with the pure
//!   [`Preferences::should_prompt`] policy and submission application
//! - [`ReleaseView`], the display projection consumed by form assembly
//!
//! Everything here is pure; persistence and dialog flow live elsewhere.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod prefs;
pub mod release;
pub mod version;
pub mod view;

pub use error::{ModelError, Result};
pub use prefs::{PreferenceSubmission, Preferences};
pub use release::{ReleaseInfo, ReleaseState, ReleaseType, Threshold};
pub use version::{InstalledVersion, NOT_INSTALLED_LABEL, Version};
pub use view::ReleaseView;
