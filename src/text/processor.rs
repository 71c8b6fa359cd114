//! Immutable text wrapper

use std::fmt;

use super::words;

/// Holds one string and answers read-only questions about it
///
/// The text is fixed at construction; every query borrows `self` and can
/// be repeated in any order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextProcessor {
    text: String,
}

impl TextProcessor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The stored text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters, not bytes
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        words(&self.text).count()
    }

    pub fn to_upper(&self) -> String {
        self.text.to_uppercase()
    }

    pub fn to_lower(&self) -> String {
        self.text.to_lowercase()
    }
}

impl From<&str> for TextProcessor {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextProcessor {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for TextProcessor {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for TextProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
