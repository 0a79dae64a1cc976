// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Numeric literal formatting

use thiserror::Error;

/// Fractional digits kept when rendering a number.
///
/// Values are rounded to this many places, so anything closer than
/// `0.5e-10` to its neighbour renders identically.
pub const FRACTION_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cannot format non-finite number {0}")]
pub struct NonFiniteNumber(pub f64);

/// Render `value` as a compact decimal literal.
///
/// Rounds to [`FRACTION_DIGITS`] places, drops trailing zeros and a bare
/// decimal point, and never uses exponent notation. Negative zero, including
/// tiny negatives that round to zero, renders as `0`.
pub fn format_number(value: f64) -> Result<String, NonFiniteNumber> {
    if !value.is_finite() {
        return Err(NonFiniteNumber(value));
    }

    let mut text = format!("{:.*}", FRACTION_DIGITS, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    Ok(text)
}
