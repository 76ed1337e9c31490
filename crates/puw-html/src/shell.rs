//! Document shell and stylesheet handling.
//!
//! The rendered form body is wrapped in a full HTML document by a
//! [`DocumentShell`]. Embedding applications that need their own page
//! chrome supply a custom shell instead of subclassing a renderer.

use std::path::Path;

/// Default inline styles used when no stylesheet file is supplied.
pub const DEFAULT_STYLES: &str = "\
.widget-header {
  white-space: nowrap;
  background-color: #CCCCCC;
  font-weight: bold;
}

.widget-label {
  white-space: nowrap;
  vertical-align: top;
  font-weight: bold;
}

.autoscroll {
  max-height: 12em;
  overflow: auto;
}
";

/// The CSS attached to rendered dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    css: String,
}

impl Stylesheet {
    /// Use the given CSS text directly.
    #[must_use]
    pub fn inline(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }

    /// Load a user-specified stylesheet file.
    ///
    /// An unreadable path is a configuration problem, not a flow failure:
    /// the default styles are used and a warning is logged.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(css) => Self { css },
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "stylesheet not readable, falling back to default styles"
                );
                Self::default()
            }
        }
    }

    /// The CSS text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.css
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            css: DEFAULT_STYLES.to_string(),
        }
    }
}

/// Strategy wrapping a rendered form body in a complete document.
pub trait DocumentShell {
    /// Produce the final document for the given styles and body markup.
    fn page(&self, styles: &str, body: &str) -> String;
}

/// The built-in document shell: a minimal HTML page with the stylesheet
/// inlined in a `<style>` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultShell;

impl DocumentShell for DefaultShell {
    fn page(&self, styles: &str, body: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <title>Software Update</title>\n\
             <meta http-equiv=\"content-type\" content=\"text/html; charset=UTF-8\" />\n\
             <style type=\"text/css\">\n{styles}</style>\n\
             </head>\n\
             <body>\n{body}\n</body>\n\
             </html>\n"
        )
    }
}
