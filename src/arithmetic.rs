//! Arithmetic operations
//!
//! Elementary operations over `f64` plus an exact integer factorial.
//! Only [`divide`] and [`factorial`] can fail.

use crate::error::{Error, Result};

/// Returns `a + b`
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`
///
/// # Errors
/// Returns [`Error::DivisionByZero`] when `b` is zero (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}

/// Raises `base` to `exponent`
///
/// Uses `powf` for every exponent. Results that are representable, such
/// as `2^3` or `10^100`, come back exact; `0^0` is 1.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Computes `n!` exactly
///
/// `factorial(0)` is 1. The largest representable input is 34.
///
/// # Errors
/// - [`Error::NegativeFactorial`] when `n < 0`
/// - [`Error::FactorialOverflow`] when the result exceeds `u128::MAX`
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(Error::NegativeFactorial);
    }

    (1..=n as u128).try_fold(1u128, |acc, k| {
        acc.checked_mul(k).ok_or(Error::FactorialOverflow { n })
    })
}

/// Method-style access to the binary operations
///
/// Carries no state; every method forwards to the free function of the
/// same name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Calculator
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        add(a, b)
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        subtract(a, b)
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        multiply(a, b)
    }

    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        divide(a, b)
    }

    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        power(base, exponent)
    }
}
