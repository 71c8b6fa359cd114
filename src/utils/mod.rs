//! Utility functions
//!
//! Presentation helpers used by the command-line front end. Nothing in
//! here is needed to call the arithmetic or text operations directly.

pub mod formatting;
