//! Dialog flow controller for web-based update prompts.
//!
//! Asks the user, across stateless request/response cycles, whether a
//! detected update should be installed, and records per-package preferences
//! that can suppress future prompts. The actual version checking and
//! installation happen behind the [`UpdateChecker`] and [`Installer`]
//! seams; this crate owns the screens and the transitions between them.
//!
//! # Flow
//!
//! One call to [`DialogFlow::run`] per inbound request. The flow renders at
//! most one screen (main confirmation, preferences, or error) and suspends
//! by returning its markup with `terminal = false`; the browser's next
//! submission resumes the flow, which rebuilds everything it needs from the
//! preference store and the submitted field values. Terminal outcomes
//! report whether the user confirmed the update, in which case the caller
//! runs [`DialogFlow::install_update`].
//!
//! ```no_run
//! use puw_flow::{DialogFlow, JsonFileStore, QueuedErrors, Submission};
//! # struct Checker;
//! # impl puw_flow::UpdateChecker for Checker {
//! #     fn has_update(&mut self) -> puw_flow::Result<bool> { Ok(false) }
//! #     fn release_info(&self) -> puw_flow::Result<&puw_model::ReleaseInfo> { unreachable!() }
//! #     fn installed_version(&self) -> puw_model::InstalledVersion { Default::default() }
//! # }
//!
//! fn handle_request(form_fields: Vec<(String, String)>) -> puw_flow::Result<String> {
//!     let store = JsonFileStore::open("ppu-prefs.json")?;
//!     let mut flow = DialogFlow::new(Checker, store, QueuedErrors::new());
//!
//!     let outcome = flow.run("sample-pkg", &Submission::from_fields(form_fields))?;
//!     Ok(outcome.markup.unwrap_or_default())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collaborators;
pub mod error;
pub mod flow;
pub mod forms;
pub mod store;
pub mod submission;

pub use collaborators::{
    ErrorContext, ErrorQueue, ErrorRecord, Installer, PreferenceStore, QueuedErrors, UpdateChecker,
};
pub use error::{FlowError, Result};
pub use flow::{DialogFlow, FlowOutcome, Outcome};
pub use forms::{button, error_form, field, main_form, preferences_form};
pub use store::JsonFileStore;
pub use submission::Submission;
