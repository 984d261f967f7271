//! Rendering of flattened error messages.

use crate::types::alloc_type::{format, String, ToString, Vec};
use crate::types::Error;
use core::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for customizing how leaf messages are laid out.
pub trait ErrorFormatter {
    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn separator(&self) -> &str {
        ", "
    }

    fn format_messages<'a>(&self, messages: impl Iterator<Item = &'a str>) -> String {
        messages
            .map(|message| self.format_message(message))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based message formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub message_prefix: Option<String>,
    pub message_suffix: Option<String>,
    pub last_prefix: Option<String>,
    pub header: Option<String>,
    pub multiline: bool,
    pub numbered: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: ", ".into(),
            message_prefix: None,
            message_suffix: None,
            last_prefix: None,
            header: None,
            multiline: false,
            numbered: false,
        }
    }
}

impl ErrorFormatConfig {
    /// Box-drawing tree, one message per line.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            message_prefix: Some("├─ ".into()),
            last_prefix: Some("└─ ".into()),
            multiline: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    /// One `- message` line per leaf.
    #[inline]
    pub fn bulleted() -> Self {
        Self {
            separator: "\n".into(),
            message_prefix: Some("- ".into()),
            multiline: true,
            ..Default::default()
        }
    }

    /// One `N. message` line per leaf, counting from 1.
    #[inline]
    pub fn numbered() -> Self {
        Self { separator: "\n".into(), multiline: true, numbered: true, ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_message(&self, message: &str) -> String {
        let mut result = String::new();
        if let Some(prefix) = &self.message_prefix {
            result.push_str(prefix);
        }
        result.push_str(message);
        if let Some(suffix) = &self.message_suffix {
            result.push_str(suffix);
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_messages<'a>(&self, messages: impl Iterator<Item = &'a str>) -> String {
        let items: Vec<&str> = messages.collect();
        if items.is_empty() {
            return String::new();
        }

        let item_count = items.len();
        let mut result = String::with_capacity(item_count * 32);

        if let Some(header) = &self.header {
            result.push_str(header);
            result.push_str(if self.multiline { "\n" } else { " " });
        }

        // The tree glyph takes the place of the message prefix; numbering and
        // the suffix apply in both layouts.
        let tree = self.multiline && self.message_prefix.is_some() && self.last_prefix.is_some();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
            }
            if tree {
                result.push_str(match i {
                    _ if item_count == 1 => "─ ",
                    0 => "┌ ",
                    _ if i == item_count - 1 => self.last_prefix.as_deref().unwrap_or_default(),
                    _ => self.message_prefix.as_deref().unwrap_or_default(),
                });
            }
            if self.numbered {
                result.push_str(&format!("{}. ", i + 1));
            }
            if tree {
                result.push_str(item);
                if let Some(suffix) = &self.message_suffix {
                    result.push_str(suffix);
                }
            } else {
                result.push_str(&self.format_message(item));
            }
        }
        result
    }
}

/// Builder for customizing error display output.
///
/// # Examples
///
/// ```
/// use rule_rail::Error;
///
/// let error = Error::and(Error::single("name is empty"), Error::single("age is negative"));
///
/// assert_eq!(error.formatted().compact().to_string(), "name is empty | age is negative");
/// assert_eq!(
///     error.formatted().bulleted().header("2 problems:").to_string(),
///     "2 problems:\n- name is empty\n- age is negative"
/// );
/// ```
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a Error,
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(error: &'a Error) -> Self {
        Self { error, config: ErrorFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.config.header = Some(header.into());
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    pub fn bulleted(mut self) -> Self {
        self.config = ErrorFormatConfig::bulleted();
        self
    }

    pub fn numbered(mut self) -> Self {
        self.config = ErrorFormatConfig::numbered();
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.config.format_messages(self.error.messages()))
    }
}

impl Error {
    /// Starts a [`ErrorFormatBuilder`] for this error.
    #[inline]
    pub fn formatted(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }

    /// Renders the flattened messages with `formatter`.
    pub fn render<F: ErrorFormatter>(&self, formatter: &F) -> String {
        formatter.format_messages(self.messages())
    }
}
