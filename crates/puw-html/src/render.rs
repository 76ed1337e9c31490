//! HTML rendering of abstract forms.
//!
//! A purely presentational transform: each field role maps to a table row,
//! the rows are wrapped in a `<form>`, and the result is handed to the
//! [`DocumentShell`] together with the stylesheet. The renderer never
//! branches on field names.

use std::fmt::Write as _;

use crate::form::{Button, Field, Form, RadioOption};
use crate::shell::{DefaultShell, DocumentShell, Stylesheet};

/// Row layout for rendered dialogs.
///
/// Labeled dialogs put labels in a separate column; unlabeled dialogs use a
/// single column where grouping implies the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Two columns: label and value.
    WithLabels,
    /// One column, no label cells.
    WithoutLabels,
}

/// Renders abstract forms into complete HTML documents.
pub struct Renderer<'a> {
    layout: Layout,
    stylesheet: Stylesheet,
    shell: &'a dyn DocumentShell,
}

impl<'a> Renderer<'a> {
    /// Create a renderer with the default stylesheet and document shell.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            stylesheet: Stylesheet::default(),
            shell: &DefaultShell,
        }
    }

    /// Replace the stylesheet.
    #[must_use]
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Replace the document shell.
    #[must_use]
    pub fn with_shell(mut self, shell: &'a dyn DocumentShell) -> Self {
        self.shell = shell;
        self
    }

    /// Render a form into a complete HTML document.
    #[must_use]
    pub fn render(&self, form: &Form) -> String {
        let body = self.render_body(form);
        self.shell.page(self.stylesheet.as_str(), &body)
    }

    /// Render the form table without the document shell.
    #[must_use]
    pub fn render_body(&self, form: &Form) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<form id=\"{}\" method=\"post\" action=\"\">\n<table class=\"dialogbox\">\n",
            escape(&form.name)
        );

        for field in &form.fields {
            self.render_field(&mut out, field);
        }

        out.push_str("</table>\n</form>\n");
        out
    }

    fn render_field(&self, out: &mut String, field: &Field) {
        match field {
            Field::Header { text } => self.header_row(out, text),
            Field::Static {
                label, text, scroll, ..
            } => {
                let mut content = multiline(text);
                if *scroll {
                    content = format!("<div class=\"autoscroll\">{content}</div>");
                }
                self.value_row(out, label.as_deref(), &content);
            }
            Field::Text { label, value, .. } => {
                self.value_row(out, Some(label), &escape(value));
            }
            Field::Checkbox {
                name,
                label,
                checked,
            } => {
                let checked_attr = if *checked { " checked=\"checked\"" } else { "" };
                let content = format!(
                    "<label><input type=\"checkbox\" name=\"{}\" value=\"1\"{checked_attr} /> {}</label>",
                    escape(name),
                    escape(label)
                );
                self.value_row(out, None, &content);
            }
            Field::RadioGroup {
                name,
                label,
                options,
                selected,
            } => self.radio_rows(out, name, label, options, selected),
            Field::Buttons { buttons } => self.button_row(out, buttons),
        }
    }

    fn header_row(&self, out: &mut String, text: &str) {
        let cell = match self.layout {
            Layout::WithLabels => "<td class=\"widget-header\" colspan=\"2\">",
            Layout::WithoutLabels => "<td class=\"widget-header\">",
        };
        let _ = write!(out, "<tr>\n\t{cell}{}</td>\n</tr>\n", escape(text));
    }

    /// A regular row: label cell (labeled layout only) plus value cell.
    fn value_row(&self, out: &mut String, label: Option<&str>, content: &str) {
        match self.layout {
            Layout::WithLabels => {
                let label = label.map(escape).unwrap_or_default();
                let _ = write!(
                    out,
                    "<tr>\n\t<td class=\"widget-label\">{label}</td>\n\t<td class=\"widget-input\">{content}</td>\n</tr>\n"
                );
            }
            Layout::WithoutLabels => {
                let _ = write!(
                    out,
                    "<tr>\n\t<td class=\"widget-input\">{content}</td>\n</tr>\n"
                );
            }
        }
    }

    fn radio_rows(
        &self,
        out: &mut String,
        name: &str,
        label: &str,
        options: &[RadioOption],
        selected: &str,
    ) {
        let mut inputs = String::new();
        for option in options {
            let checked = if option.value == selected {
                " checked=\"checked\""
            } else {
                ""
            };
            let _ = write!(
                inputs,
                "<label><input type=\"radio\" name=\"{}\" value=\"{}\"{checked} /> {}</label><br />",
                escape(name),
                escape(&option.value),
                escape(&option.label)
            );
        }

        match self.layout {
            Layout::WithLabels => self.value_row(out, Some(label), &inputs),
            // The group label sits above its options in the single column.
            Layout::WithoutLabels => {
                let content = format!("{}<br />{inputs}", escape(label));
                self.value_row(out, None, &content);
            }
        }
    }

    fn button_row(&self, out: &mut String, buttons: &[Button]) {
        let inputs: Vec<String> = buttons
            .iter()
            .map(|b| {
                format!(
                    "<input type=\"submit\" name=\"{}\" value=\"{}\" />",
                    escape(&b.name),
                    escape(&b.label)
                )
            })
            .collect();
        let inputs = inputs.join("&nbsp;");

        match self.layout {
            Layout::WithLabels => {
                let _ = write!(
                    out,
                    "<tr class=\"widget-buttons\">\n\t<td>&nbsp;</td>\n\t<td>{inputs}</td>\n</tr>\n"
                );
            }
            Layout::WithoutLabels => {
                let _ = write!(
                    out,
                    "<tr class=\"widget-buttons\">\n\t<td>{inputs}</td>\n</tr>\n"
                );
            }
        }
    }
}

/// Escape text for use in HTML content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text and convert line breaks to `<br />`.
fn multiline(text: &str) -> String {
    escape(text).replace('\n', "<br />\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Button, Form, RadioOption};

    fn sample_form() -> Form {
        let mut form = Form::new("sample");
        form.header("Update available")
            .text("current_version", "Current Version:", "1.0.0")
            .buttons(vec![
                Button::new("btn_no", "No"),
                Button::new("btn_yes", "Yes"),
            ]);
        form
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_labeled_layout_has_label_cells() {
        let body = Renderer::new(Layout::WithLabels).render_body(&sample_form());
        assert!(body.contains("<td class=\"widget-label\">Current Version:</td>"));
        assert!(body.contains("<td class=\"widget-input\">1.0.0</td>"));
        assert!(body.contains("colspan=\"2\""));
    }

    #[test]
    fn test_unlabeled_layout_has_no_label_cells() {
        let body = Renderer::new(Layout::WithoutLabels).render_body(&sample_form());
        assert!(!body.contains("widget-label"));
        assert!(!body.contains("colspan"));
    }

    #[test]
    fn test_buttons_render_as_submits() {
        let body = Renderer::new(Layout::WithLabels).render_body(&sample_form());
        assert!(body.contains("<input type=\"submit\" name=\"btn_yes\" value=\"Yes\" />"));
        assert!(body.contains("class=\"widget-buttons\""));
    }

    #[test]
    fn test_checkbox_checked_state() {
        let mut form = Form::new("prefs");
        form.checkbox("dont_ask", "Don't ask me again", true);
        let body = Renderer::new(Layout::WithoutLabels).render_body(&form);
        assert!(body.contains("type=\"checkbox\" name=\"dont_ask\" value=\"1\" checked=\"checked\""));

        let mut form = Form::new("prefs");
        form.checkbox("dont_ask", "Don't ask me again", false);
        let body = Renderer::new(Layout::WithoutLabels).render_body(&form);
        assert!(!body.contains("checked"));
    }

    #[test]
    fn test_radio_group_selection() {
        let mut form = Form::new("prefs");
        form.radio_group(
            "min_state",
            "Only ask when the state is at least:",
            vec![
                RadioOption::new("all", "All states"),
                RadioOption::new("beta", "beta"),
            ],
            "beta",
        );
        let body = Renderer::new(Layout::WithoutLabels).render_body(&form);
        assert!(body.contains("value=\"beta\" checked=\"checked\""));
        assert!(!body.contains("value=\"all\" checked"));
        // Group label sits above the options in the unlabeled layout.
        assert!(body.contains("Only ask when the state is at least:<br />"));
    }

    #[test]
    fn test_scrolling_static_preserves_line_breaks() {
        let mut form = Form::new("main");
        form.scrolling_text("release_notes", Some("Release Notes:".into()), "one\ntwo");
        let body = Renderer::new(Layout::WithLabels).render_body(&form);
        assert!(body.contains("<div class=\"autoscroll\">one<br />\ntwo</div>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut form = Form::new("main");
        form.text("notes", "Notes:", "<script>alert(1)</script>");
        let body = Renderer::new(Layout::WithLabels).render_body(&form);
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_wraps_in_document() {
        let html = Renderer::new(Layout::WithLabels).render(&sample_form());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<form id=\"sample\""));
        assert!(html.contains(".widget-header"));
    }

    #[test]
    fn test_custom_shell() {
        struct BareShell;
        impl DocumentShell for BareShell {
            fn page(&self, _styles: &str, body: &str) -> String {
                format!("<main>{body}</main>")
            }
        }

        let shell = BareShell;
        let html = Renderer::new(Layout::WithLabels)
            .with_shell(&shell)
            .render(&sample_form());
        assert!(html.starts_with("<main>"));
        assert!(!html.contains("<!DOCTYPE"));
    }
}
