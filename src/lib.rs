//! textcalc library
//!
//! Basic arithmetic and string utilities. Every operation is a pure
//! function of its input; only division and factorial can fail.
//! Modules are exposed for integration testing and for the CLI.

pub mod arithmetic;
pub mod config;
pub mod error;
pub mod text;
pub mod utils;

// Re-export the operations so callers can use them from the crate root
pub use arithmetic::{add, divide, factorial, multiply, power, subtract, Calculator};
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use text::{capitalize_words, count_vowels, is_palindrome, reverse_string, TextProcessor};
