//! Assembly of the three dialog forms.
//!
//! Builders are pure: the same metadata and preferences always produce the
//! same abstract form. Field names are stable constants; the flow uses the
//! same constants to interpret what comes back.

use puw_html::{Button, Form, RadioOption};
use puw_model::{Preferences, ReleaseState, ReleaseType, ReleaseView, Threshold};

use crate::collaborators::ErrorRecord;

/// Stable names for non-button fields.
pub mod field {
    /// Main/error dialog message text.
    pub const MESSAGE: &str = "message";
    /// Installed version display field.
    pub const CURRENT_VERSION: &str = "current_version";
    /// Candidate version display field.
    pub const RELEASE_VERSION: &str = "release_version";
    /// Release date display field.
    pub const RELEASE_DATE: &str = "release_date";
    /// Release state display field.
    pub const RELEASE_STATE: &str = "release_state";
    /// Release notes display field.
    pub const RELEASE_NOTES: &str = "release_notes";
    /// Publisher display field.
    pub const RELEASED_BY: &str = "released_by";
    /// "Don't ask me again" checkbox.
    pub const DONT_ASK: &str = "dont_ask";
    /// "Don't ask until the next release" checkbox.
    pub const NEXT_RELEASE: &str = "next_release";
    /// Minimum-state radio group.
    pub const MIN_STATE: &str = "min_state";
    /// Minimum-type radio group.
    pub const MIN_TYPE: &str = "min_type";
    /// Error context: source file.
    pub const CONTEXT_FILE: &str = "context_file";
    /// Error context: source line.
    pub const CONTEXT_LINE: &str = "context_line";
    /// Error context: function name.
    pub const CONTEXT_FUNCTION: &str = "context_function";
    /// Error context: class or type name.
    pub const CONTEXT_CLASS: &str = "context_class";
}

/// Stable names for submit buttons. Presence in a submission identifies
/// both the screen that was posted and the button that was pressed.
pub mod button {
    /// Main dialog: open the preferences dialog.
    pub const MAIN_PREFS: &str = "btn_prefs";
    /// Main dialog: decline the update.
    pub const MAIN_NO: &str = "main_btn_no";
    /// Main dialog: confirm the update.
    pub const MAIN_YES: &str = "main_btn_yes";
    /// Preferences dialog: discard changes.
    pub const PREF_NO: &str = "pref_btn_no";
    /// Preferences dialog: save changes.
    pub const PREF_YES: &str = "pref_btn_yes";
    /// Error dialog: acknowledge.
    pub const ERROR_OK: &str = "error_btn_ok";
}

/// Build the main confirmation dialog for a candidate release.
#[must_use]
pub fn main_form(release: &ReleaseView<'_>) -> Form {
    let package = release.package_name();
    let mut form = Form::new("update_main");

    form.header(format!("Update available for: {package}"))
        .static_text(
            field::MESSAGE,
            None,
            format!("A new version of {package} is available.\n\nWould you like to upgrade?"),
        )
        .text(
            field::CURRENT_VERSION,
            "Current Version:",
            release.current_version(),
        )
        .text(
            field::RELEASE_VERSION,
            "Release Version:",
            release.release_version(),
        )
        .text(field::RELEASE_DATE, "Release Date:", release.release_date())
        .text(
            field::RELEASE_STATE,
            "Release State:",
            release.release_state(),
        )
        .scrolling_text(
            field::RELEASE_NOTES,
            Some("Release Notes:".to_string()),
            release.release_notes(),
        )
        .text(field::RELEASED_BY, "Released By:", release.released_by())
        .buttons(vec![
            Button::new(button::MAIN_PREFS, "Preferences"),
            Button::new(button::MAIN_NO, "No"),
            Button::new(button::MAIN_YES, "Yes"),
        ]);

    form
}

/// Build the preferences dialog, defaulted from the existing record.
#[must_use]
pub fn preferences_form(package_name: &str, prefs: &Preferences) -> Form {
    let mut form = Form::new("update_prefs");

    form.header(format!("{package_name} Update Preferences"))
        .checkbox(field::DONT_ASK, "Don't ask me again", prefs.suppress_all)
        .checkbox(
            field::NEXT_RELEASE,
            "Don't ask again until the next release.",
            prefs.suppress_until_next_release,
        )
        .radio_group(
            field::MIN_STATE,
            "Only ask when the state is at least:",
            state_options(),
            selected(&prefs.min_state),
        )
        .radio_group(
            field::MIN_TYPE,
            "Only ask when the type is at least:",
            type_options(),
            selected(&prefs.min_type),
        )
        .buttons(vec![
            Button::new(button::PREF_NO, "No"),
            Button::new(button::PREF_YES, "Yes"),
        ]);

    form
}

/// Build the error dialog for the oldest queued error.
///
/// Context fields appear only when a detailed view was requested; fields
/// the error record lacks default to empty strings.
#[must_use]
pub fn error_form(package_name: &str, record: &ErrorRecord, with_context: bool) -> Form {
    let mut form = Form::new("update_error");

    form.header(format!(
        "Errors occurred while trying to update: {package_name}"
    ))
    .static_text(
        field::MESSAGE,
        Some("Message:".to_string()),
        record.message.as_str(),
    );

    if with_context {
        let context = record.context.clone().unwrap_or_default();
        form.text(field::CONTEXT_FILE, "File:", context.file)
            .text(field::CONTEXT_LINE, "Line:", context.line)
            .text(field::CONTEXT_FUNCTION, "Function:", context.function)
            .text(field::CONTEXT_CLASS, "Class:", context.class);
    }

    form.buttons(vec![Button::new(button::ERROR_OK, "Ok")]);
    form
}

fn state_options() -> Vec<RadioOption> {
    let mut options = vec![RadioOption::new("all", "All states")];
    options.extend(
        ReleaseState::ALL
            .iter()
            .map(|s| RadioOption::new(s.as_str(), s.as_str())),
    );
    options
}

fn type_options() -> Vec<RadioOption> {
    vec![
        RadioOption::new("all", "All Release Types"),
        RadioOption::new(ReleaseType::Bug.as_str(), "Bug fix"),
        RadioOption::new(ReleaseType::Minor.as_str(), "Minor"),
        RadioOption::new(ReleaseType::Major.as_str(), "Major"),
    ]
}

fn selected<T: std::fmt::Display>(threshold: &Threshold<T>) -> String {
    threshold.to_string()
}
