//! The dialog flow controller.
//!
//! Each inbound request runs [`DialogFlow::run`] exactly once. The flow
//! decides which screen applies, renders it, and suspends by returning the
//! markup; nothing is kept in memory between invocations. A later request
//! re-enters `run` with the re-submitted field values, and the screen they
//! belong to is recovered from the button names they contain.
//!
//! Screen priority per invocation:
//!
//! 1. queued errors (oldest first, one per render)
//! 2. a main-dialog submission (`Yes` / `No` / `Preferences`)
//! 3. a preferences-dialog submission (`Yes` saves, `No` discards)
//! 4. fresh entry: prompt if an update exists and preferences allow it

use chrono::Utc;

use puw_html::{DefaultShell, DocumentShell, Form, Layout, Renderer, Stylesheet};
use puw_model::ReleaseView;

use crate::collaborators::{ErrorQueue, ErrorRecord, Installer, PreferenceStore, UpdateChecker};
use crate::error::Result;
use crate::forms::{button, error_form, main_form, preferences_form};
use crate::submission::Submission;

/// How a terminated flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed the update; the caller should install and
    /// signal a restart.
    Confirmed,
    /// The update was declined for this occurrence.
    Declined,
}

/// The result of one flow invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowOutcome {
    /// Markup to send to the browser, when a screen was rendered.
    pub markup: Option<String>,
    /// Whether the flow has terminated. A non-terminal outcome is a
    /// suspend point: the flow waits for the next request.
    pub terminal: bool,
    /// How the flow ended, when it terminated through a user choice.
    pub outcome: Option<Outcome>,
}

impl FlowOutcome {
    /// A rendered screen awaiting the next request.
    fn suspended(markup: String) -> Self {
        Self {
            markup: Some(markup),
            terminal: false,
            outcome: None,
        }
    }

    /// A terminal state with no further markup.
    fn terminated(outcome: Option<Outcome>) -> Self {
        Self {
            markup: None,
            terminal: true,
            outcome,
        }
    }

    /// Whether the user confirmed the update.
    #[must_use]
    pub fn confirmed(&self) -> bool {
        self.outcome == Some(Outcome::Confirmed)
    }
}

/// The dialog flow controller.
///
/// Owns the collaborator seams and the presentation configuration. All
/// state needed to resume a dialog is reconstructed from the preference
/// store and the inbound submission on every call.
pub struct DialogFlow<C, S, Q> {
    checker: C,
    store: S,
    errors: Q,
    with_error_context: bool,
    stylesheet: Stylesheet,
    shell: Box<dyn DocumentShell>,
}

impl<C, S, Q> DialogFlow<C, S, Q>
where
    C: UpdateChecker,
    S: PreferenceStore,
    Q: ErrorQueue,
{
    /// Create a flow with the default stylesheet and document shell.
    pub fn new(checker: C, store: S, errors: Q) -> Self {
        Self {
            checker,
            store,
            errors,
            with_error_context: false,
            stylesheet: Stylesheet::default(),
            shell: Box::new(DefaultShell),
        }
    }

    /// Include file/line/function/class fields on the error screen.
    #[must_use]
    pub fn with_error_context(mut self, enabled: bool) -> Self {
        self.with_error_context = enabled;
        self
    }

    /// Replace the stylesheet attached to rendered dialogs.
    #[must_use]
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Replace the document shell wrapping rendered dialogs.
    #[must_use]
    pub fn with_shell(mut self, shell: Box<dyn DocumentShell>) -> Self {
        self.shell = shell;
        self
    }

    /// The error queue, for collaborators that need to report failures.
    pub fn errors_mut(&mut self) -> &mut Q {
        &mut self.errors
    }

    /// Run one request/response cycle of the dialog flow.
    ///
    /// Returns the rendered markup and whether the flow terminated.
    /// Collaborator prerequisite failures (checker metadata, preference
    /// storage) are raised to the caller; user-facing errors travel
    /// through the error queue instead.
    pub fn run(&mut self, package_key: &str, submission: &Submission) -> Result<FlowOutcome> {
        // Queued errors outrank every other screen, one per render.
        if self.errors.has_errors()
            && let Some(record) = self.errors.pop_oldest()
        {
            return Ok(self.present_error(package_key, &record));
        }

        if submission.contains(button::ERROR_OK) {
            tracing::debug!(package = package_key, "error acknowledged, queue empty");
            return Ok(FlowOutcome::terminated(None));
        }

        if submission.contains(button::MAIN_YES) {
            tracing::info!(package = package_key, "update confirmed");
            return Ok(FlowOutcome::terminated(Some(Outcome::Confirmed)));
        }

        if submission.contains(button::MAIN_NO) {
            tracing::info!(package = package_key, "update declined");
            return Ok(FlowOutcome::terminated(Some(Outcome::Declined)));
        }

        if submission.contains(button::MAIN_PREFS) {
            let prefs = self.store.load(package_key)?;
            let form = preferences_form(package_key, &prefs);
            tracing::debug!(package = package_key, "showing preferences dialog");
            return Ok(FlowOutcome::suspended(
                self.render(Layout::WithoutLabels, &form),
            ));
        }

        if submission.contains(button::PREF_YES) {
            return self.save_preferences(package_key, submission);
        }

        if submission.contains(button::PREF_NO) {
            tracing::debug!(package = package_key, "preferences discarded");
            return Ok(FlowOutcome::terminated(Some(Outcome::Declined)));
        }

        self.fresh_entry(package_key)
    }

    /// First entry with no recognized submission: prompt or terminate.
    fn fresh_entry(&mut self, package_key: &str) -> Result<FlowOutcome> {
        if !self.checker.has_update()? {
            tracing::debug!(package = package_key, "no update available");
            return Ok(FlowOutcome::terminated(None));
        }

        let prefs = self.store.load(package_key)?;
        let info = self.checker.release_info()?;
        if !prefs.should_prompt(info) {
            return Ok(FlowOutcome::terminated(None));
        }

        tracing::info!(
            package = package_key,
            version = %info.latest_version,
            "showing update prompt"
        );
        let form = main_form(&ReleaseView::new(info));
        Ok(FlowOutcome::suspended(
            self.render(Layout::WithLabels, &form),
        ))
    }

    /// Apply and persist a confirmed preferences submission, then decline
    /// the update for this occurrence.
    fn save_preferences(
        &mut self,
        package_key: &str,
        submission: &Submission,
    ) -> Result<FlowOutcome> {
        let current = self.store.load(package_key)?;
        let mut updated = current.apply_submission(&submission.preference_values());

        // The "until next release" marker tracks the version being offered
        // right now; a later, different version prompts again.
        if updated.suppress_until_next_release {
            updated.last_seen_version = Some(self.checker.release_info()?.latest_version.clone());
        } else {
            updated.last_seen_version = None;
        }
        updated.saved_at = Some(Utc::now());

        self.store.save(package_key, &updated)?;
        tracing::info!(package = package_key, "preferences saved");
        Ok(FlowOutcome::terminated(Some(Outcome::Declined)))
    }

    fn present_error(&self, package_key: &str, record: &ErrorRecord) -> FlowOutcome {
        tracing::debug!(
            package = package_key,
            message = %record.message,
            "showing error dialog"
        );
        let form = error_form(package_key, record, self.with_error_context);
        FlowOutcome::suspended(self.render(Layout::WithLabels, &form))
    }

    fn render(&self, layout: Layout, form: &Form) -> String {
        Renderer::new(layout)
            .with_stylesheet(self.stylesheet.clone())
            .with_shell(self.shell.as_ref())
            .render(form)
    }

    /// Install a confirmed update and signal the restart.
    ///
    /// Returns `true` when the installer succeeded and the restart was
    /// signaled. A failure is queued for the error screen so the next
    /// invocation of [`Self::run`] presents it.
    pub fn install_update<I: Installer>(&mut self, installer: &mut I) -> bool {
        match installer.install() {
            Ok(()) => {
                tracing::info!("update installed, signaling restart");
                installer.signal_restart();
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "installation failed");
                self.errors.push(ErrorRecord::new(err.to_string()));
                false
            }
        }
    }
}
