//! Detail text formatting.
//!
//! Every detail becomes at most one line. Key and value are classified
//! independently through [`Render`]:
//!
//! - both render → `"{key} : {value}"`
//! - one renders → that text alone
//! - neither renders → no line at all
//!
//! Lines are emitted most recent detail first and each ends with `\n`.
use crate::traits::Render;
use crate::types::{Detail, DetailValue};

/// Separator between key and value text. Log parsers rely on it verbatim.
pub const PAIR_SEPARATOR: &str = " : ";

/// Trait for customizing detail line formatting.
pub trait DetailFormatter {
    fn separator(&self) -> &str {
        PAIR_SEPARATOR
    }

    fn line_prefix(&self) -> &str {
        ""
    }

    fn format_pair(&self, key: &DetailValue, value: &DetailValue) -> Option<String> {
        let key = non_empty(key.render());
        let value = non_empty(value.render());

        let mut line = String::from(self.line_prefix());
        match (key, value) {
            (Some(key), Some(value)) => {
                line.push_str(&key);
                line.push_str(self.separator());
                line.push_str(&value);
            },
            (Some(text), None) | (None, Some(text)) => line.push_str(&text),
            (None, None) => return None,
        }
        Some(line)
    }
}

/// Formatter applying the default rule with no configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainFormatter;

impl DetailFormatter for PlainFormatter {}

/// Configuration-based detail formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub separator: String,
    pub line_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { separator: PAIR_SEPARATOR.into(), line_prefix: String::new() }
    }
}

impl RenderConfig {
    /// Two-space indented lines, handy when nesting detailed output.
    #[inline]
    pub fn indented() -> Self {
        Self { line_prefix: "  ".into(), ..Default::default() }
    }

    #[inline]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[inline]
    pub fn with_line_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.line_prefix = prefix.into();
        self
    }
}

impl DetailFormatter for RenderConfig {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn line_prefix(&self) -> &str {
        &self.line_prefix
    }
}

/// Renders one key/value pair with the default rule.
///
/// # Examples
///
/// ```
/// use error_detail::{render_pair, DetailValue};
///
/// let line = render_pair(&"Key".into(), &"Value".into());
/// assert_eq!(line.as_deref(), Some("Key : Value"));
///
/// let silent = render_pair(&DetailValue::new(7_u8), &DetailValue::nil());
/// assert_eq!(silent, None);
/// ```
#[inline]
pub fn render_pair(key: &DetailValue, value: &DetailValue) -> Option<String> {
    PlainFormatter.format_pair(key, value)
}

/// Concatenates the lines of `details` in iteration order, one `\n` each.
pub fn render_details<'a, I>(formatter: &dyn DetailFormatter, details: I) -> String
where
    I: IntoIterator<Item = &'a Detail>,
{
    let mut text = String::new();
    for detail in details {
        if let Some(line) = formatter.format_pair(&detail.key, &detail.value) {
            text.push_str(&line);
            text.push('\n');
        }
    }
    text
}

#[inline]
fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.is_empty())
}
