// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Numeric lap/track values held as parsed text until they are needed.

use std::borrow::Cow;
use std::fmt;

use crate::error::{AppError, Result};

/// A numeric document value.
///
/// Values read from a document stay as their raw text (`Raw`) so that
/// serializing an untouched tree writes back exactly what was read.
/// Aggregation produces rounded integers (`Whole`).
#[derive(Debug, Clone)]
pub enum Quantity {
    Raw(String),
    Whole(i64),
}

impl Quantity {
    /// Coerce to `f64`. `field` names the element for error reporting.
    pub fn value(&self, field: &'static str) -> Result<f64> {
        match self {
            Quantity::Raw(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| AppError::InvalidNumber {
                    field,
                    value: text.clone(),
                }),
            Quantity::Whole(n) => Ok(*n as f64),
        }
    }

    /// Sum the coerced values and round ties to even.
    pub fn sum_rounded<'q, I>(field: &'static str, values: I) -> Result<Quantity>
    where
        I: IntoIterator<Item = &'q Quantity>,
    {
        let mut total = 0.0;
        for value in values {
            total += value.value(field)?;
        }
        let rounded = total.round_ties_even();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
            return Err(AppError::InvalidNumber {
                field,
                value: total.to_string(),
            });
        }
        Ok(Quantity::Whole(rounded as i64))
    }

    /// Text as it will appear in the document.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Quantity::Raw(text) => Cow::Borrowed(text),
            Quantity::Whole(n) => Cow::Owned(n.to_string()),
        }
    }
}

/// Two quantities are equal when they serialize to the same text.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.as_text() == other.as_text()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for Quantity {
    fn from(text: &str) -> Self {
        Quantity::Raw(text.trim().to_string())
    }
}

impl From<String> for Quantity {
    fn from(text: String) -> Self {
        Quantity::from(text.as_str())
    }
}

impl From<i64> for Quantity {
    fn from(n: i64) -> Self {
        Quantity::Whole(n)
    }
}
