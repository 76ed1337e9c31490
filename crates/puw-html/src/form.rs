//! Abstract dialog form description.
//!
//! A [`Form`] is an ordered list of field groups, each tagged with a stable
//! field name that the dialog flow later uses to interpret submissions.
//! The renderer matches only on the structural role of each field, never on
//! its name, which keeps presentation decoupled from flow semantics.

/// A single radio option within a radio group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    /// The value submitted when this option is selected.
    pub value: String,
    /// The visible option label.
    pub label: String,
}

impl RadioOption {
    /// Create a radio option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A submit button within a button row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// The field name submitted when this button is pressed.
    pub name: String,
    /// The visible button label.
    pub label: String,
}

impl Button {
    /// Create a button.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// A field group within a form, tagged with its structural role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Dialog title row.
    Header {
        /// The header text.
        text: String,
    },

    /// Static informational text. When `scroll` is set the text is wrapped
    /// in an auto-scrolling block (used for release notes).
    Static {
        /// Stable field name.
        name: String,
        /// Optional label shown next to the text in labeled layouts.
        label: Option<String>,
        /// The text content; line breaks are preserved in the output.
        text: String,
        /// Wrap the text in an auto-scrolling block.
        scroll: bool,
    },

    /// A labeled read-only value (the dialogs never accept typed input).
    Text {
        /// Stable field name.
        name: String,
        /// The visible label.
        label: String,
        /// The displayed value.
        value: String,
    },

    /// A checkbox input.
    Checkbox {
        /// Stable field name.
        name: String,
        /// The visible label.
        label: String,
        /// Whether the box is pre-checked.
        checked: bool,
    },

    /// A radio group over a fixed set of options.
    RadioGroup {
        /// Stable field name shared by all options.
        name: String,
        /// The group label.
        label: String,
        /// The options, in display order.
        options: Vec<RadioOption>,
        /// The value of the pre-selected option.
        selected: String,
    },

    /// A row of submit buttons.
    Buttons {
        /// The buttons, in display order.
        buttons: Vec<Button>,
    },
}

/// An assembled dialog form: an ordered list of field groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    /// The form identifier, emitted as the form's `id` attribute.
    pub name: String,
    /// The field groups, in display order.
    pub fields: Vec<Field>,
}

impl Form {
    /// Create an empty form.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a header row.
    pub fn header(&mut self, text: impl Into<String>) -> &mut Self {
        self.fields.push(Field::Header { text: text.into() });
        self
    }

    /// Append static text.
    pub fn static_text(
        &mut self,
        name: impl Into<String>,
        label: Option<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.fields.push(Field::Static {
            name: name.into(),
            label,
            text: text.into(),
            scroll: false,
        });
        self
    }

    /// Append static text wrapped in an auto-scrolling block.
    pub fn scrolling_text(
        &mut self,
        name: impl Into<String>,
        label: Option<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.fields.push(Field::Static {
            name: name.into(),
            label,
            text: text.into(),
            scroll: true,
        });
        self
    }

    /// Append a labeled read-only value.
    pub fn text(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.fields.push(Field::Text {
            name: name.into(),
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Append a checkbox.
    pub fn checkbox(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        checked: bool,
    ) -> &mut Self {
        self.fields.push(Field::Checkbox {
            name: name.into(),
            label: label.into(),
            checked,
        });
        self
    }

    /// Append a radio group.
    pub fn radio_group(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<RadioOption>,
        selected: impl Into<String>,
    ) -> &mut Self {
        self.fields.push(Field::RadioGroup {
            name: name.into(),
            label: label.into(),
            options,
            selected: selected.into(),
        });
        self
    }

    /// Append a button row.
    pub fn buttons(&mut self, buttons: Vec<Button>) -> &mut Self {
        self.fields.push(Field::Buttons { buttons });
        self
    }
}
