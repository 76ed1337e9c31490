//! Abstract dialog forms and the HTML renderer for update prompts.
//!
//! Dialogs are assembled as [`Form`] values, ordered lists of field groups
//! tagged with structural roles (header, static text, read-only value,
//! checkbox, radio group, button row). The [`Renderer`] turns a form into a
//! final HTML document without ever inspecting field names, so the flow
//! layer can change field semantics without touching presentation.
//!
//! Two layouts are supported: [`Layout::WithLabels`] for the main and error
//! dialogs, and [`Layout::WithoutLabels`] for the preferences dialog where
//! grouping implies the layout. The surrounding page is produced by a
//! pluggable [`DocumentShell`]; embedders with their own page chrome swap in
//! a custom shell. Stylesheets come from a user-supplied file with a silent
//! fallback to the built-in defaults.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod form;
pub mod render;
pub mod shell;

pub use form::{Button, Field, Form, RadioOption};
pub use render::{Layout, Renderer, escape};
pub use shell::{DEFAULT_STYLES, DefaultShell, DocumentShell, Stylesheet};
