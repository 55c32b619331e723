//! Execution point comparison for timeline ordering
//!
//! Execution points are arbitrary-precision non-negative integers carried as
//! decimal digit strings. Real recordings produce values wider than 64 bits,
//! so points are never parsed into a native integer: comparison is
//! digit-length-first, then lexicographic, which is numerically correct for
//! decimal strings without leading zeros.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Errors for execution point handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    #[error("invalid execution point {0:?}: expected non-empty decimal digits")]
    InvalidPointFormat(String),
}

/// A position on the recording timeline
///
/// `point` is the authoritative ordering key; `time` is an advisory
/// wall-clock-ish timestamp and is never used for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub point: String,
    pub time: f64,
}

/// Check that a point string is a valid arbitrary-precision decimal
pub fn validate_point(point: &str) -> Result<(), PointError> {
    if point.is_empty() || !point.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PointError::InvalidPointFormat(point.to_string()));
    }
    Ok(())
}

/// Compare two execution points as unbounded non-negative integers
///
/// Returns `InvalidPointFormat` if either input is empty or contains a
/// non-digit byte; a malformed point must never produce a silently wrong
/// order.
pub fn compare_points(a: &str, b: &str) -> Result<Ordering, PointError> {
    validate_point(a)?;
    validate_point(b)?;
    Ok(cmp_digits(a, b))
}

/// Ordering of two already-validated digit strings
///
/// A longer string is numerically greater; equal-length decimal strings
/// order lexicographically.
pub(crate) fn cmp_digits(a: &str, b: &str) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}
