//! Collaborator contracts consumed by the dialog flow.
//!
//! Update detection, installation, preference persistence, and error
//! queueing are all external concerns; the flow only sees these traits.

use std::collections::VecDeque;

use puw_model::{InstalledVersion, Preferences, ReleaseInfo};

use crate::error::Result;

/// Reports whether an update exists and describes it.
pub trait UpdateChecker {
    /// Check the remote channel for a newer version.
    fn has_update(&mut self) -> Result<bool>;

    /// Metadata for the candidate release found by [`Self::has_update`].
    fn release_info(&self) -> Result<&ReleaseInfo>;

    /// The locally installed version, or the never-installed sentinel.
    fn installed_version(&self) -> InstalledVersion;
}

/// Downloads and installs the confirmed update.
pub trait Installer {
    /// Install the update.
    fn install(&mut self) -> Result<()>;

    /// Trigger the external reload/redirect mechanism. From the caller's
    /// perspective this ends the current process.
    fn signal_restart(&mut self);
}

/// Loads and saves per-package preferences.
///
/// Saving must be atomic with respect to a single package key;
/// last-writer-wins is acceptable.
pub trait PreferenceStore {
    /// Load the preferences for a package, defaulting on first contact.
    fn load(&self, package_key: &str) -> Result<Preferences>;

    /// Persist the preferences for a package.
    fn save(&mut self, package_key: &str, prefs: &Preferences) -> Result<()>;
}

/// Context details attached to an error record when a detailed view was
/// requested. Fields the source could not supply stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Source file.
    pub file: String,
    /// Source line.
    pub line: String,
    /// Function name.
    pub function: String,
    /// Class or type name.
    pub class: String,
}

/// A queued error awaiting display on the Error screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// The message shown to the user.
    pub message: String,
    /// Optional context details.
    pub context: Option<ErrorContext>,
}

impl ErrorRecord {
    /// Create a record with a message and no context.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
        }
    }

    /// Attach context details.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// The informational record raised when an update is detected for a
    /// package that was never installed locally. Displayed through the
    /// ordinary error path, not treated specially.
    #[must_use]
    pub fn not_installed_warning(package_name: &str) -> Self {
        Self::new(format!(
            "{package_name} is not installed locally; install it before updating."
        ))
    }
}

/// FIFO queue of errors raised by the checker or installer, drained one at
/// a time through the Error screen.
pub trait ErrorQueue {
    /// Whether any errors are waiting.
    fn has_errors(&self) -> bool;

    /// Remove and return the oldest error.
    fn pop_oldest(&mut self) -> Option<ErrorRecord>;

    /// Append an error.
    fn push(&mut self, record: ErrorRecord);
}

/// In-memory FIFO error queue.
#[derive(Debug, Clone, Default)]
pub struct QueuedErrors {
    records: VecDeque<ErrorRecord>,
}

impl QueuedErrors {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ErrorQueue for QueuedErrors {
    fn has_errors(&self) -> bool {
        !self.records.is_empty()
    }

    fn pop_oldest(&mut self) -> Option<ErrorRecord> {
        self.records.pop_front()
    }

    fn push(&mut self, record: ErrorRecord) {
        self.records.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = QueuedErrors::new();
        queue.push(ErrorRecord::new("first"));
        queue.push(ErrorRecord::new("second"));

        assert!(queue.has_errors());
        assert_eq!(queue.pop_oldest().unwrap().message, "first");
        assert_eq!(queue.pop_oldest().unwrap().message, "second");
        assert!(queue.pop_oldest().is_none());
        assert!(!queue.has_errors());
    }

    #[test]
    fn test_not_installed_warning_names_the_package() {
        let record = ErrorRecord::not_installed_warning("sample-pkg");
        assert!(record.message.contains("sample-pkg"));
        assert!(record.context.is_none());
    }
}
