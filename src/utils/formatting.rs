//! Output formatting
//!
//! Functions for rendering numeric results and text summaries in
//! human-readable form. The JSON form of a summary comes straight from
//! its `Serialize` impl.

use serde::Serialize;

use crate::text::{count_vowels, is_palindrome, TextProcessor};

/// Formats a numeric result for display
///
/// With `precision` set, prints exactly that many decimal places.
/// Without it, uses the shortest representation that round-trips, which
/// prints integral values without a fractional part ("5", not "5.0").
/// Negative zero is shown as "0".
///
/// # Arguments
/// - `value` - The number to format
/// - `precision` - Optional fixed number of decimal places
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    match precision {
        Some(places) => format!("{:.*}", places, value),
        None => value.to_string(),
    }
}

/// Everything the `inspect` command reports about a piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextReport {
    pub text: String,
    pub length: usize,
    pub word_count: usize,
    pub vowels: usize,
    pub is_palindrome: bool,
    pub upper: String,
    pub lower: String,
}

impl From<&TextProcessor> for TextReport {
    fn from(processor: &TextProcessor) -> Self {
        let text = processor.text();
        Self {
            text: text.to_string(),
            length: processor.length(),
            word_count: processor.word_count(),
            vowels: count_vowels(text),
            is_palindrome: is_palindrome(text),
            upper: processor.to_upper(),
            lower: processor.to_lower(),
        }
    }
}

/// Renders a report as aligned `label: value` lines
///
/// # Returns
/// A multi-line string, one field per line, ending with a newline
pub fn render_report(report: &TextReport) -> String {
    let rows: [(&str, String); 7] = [
        ("text", format!("{:?}", report.text)),
        ("length", report.length.to_string()),
        ("words", report.word_count.to_string()),
        ("vowels", report.vowels.to_string()),
        ("palindrome", report.is_palindrome.to_string()),
        ("upper", report.upper.clone()),
        ("lower", report.lower.clone()),
    ];

    let mut result = String::new();
    for (label, value) in rows {
        result.push_str(&format!("{:<12}{}\n", format!("{}:", label), value));
    }
    result
}
