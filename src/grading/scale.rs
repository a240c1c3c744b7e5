//! Fixed letter-to-points scale

use ahash::AHashMap;
use once_cell::sync::Lazy;

use crate::error::{GradebookError, Result};

/// Letter grade points on the standard 4.0 scale
static GPA_SCALE: Lazy<AHashMap<&'static str, f64>> = Lazy::new(|| {
    AHashMap::from_iter([
        ("A", 4.0),
        ("A-", 3.7),
        ("B+", 3.3),
        ("B", 3.0),
        ("B-", 2.7),
        ("C+", 2.3),
        ("C", 2.0),
        ("C-", 1.7),
        ("D+", 1.3),
        ("D", 1.0),
        ("F", 0.0),
    ])
});

/// Points for `letter`, `None` if the letter is not on the scale
#[inline]
pub fn gpa_points(letter: &str) -> Option<f64> {
    GPA_SCALE.get(letter).copied()
}

/// Points for `letter`, failing on letters outside the scale
pub fn gpa_points_strict(letter: &str) -> Result<f64> {
    gpa_points(letter).ok_or_else(|| GradebookError::UnknownLetter(letter.to_string()))
}

/// Round a GPA to 2 decimal places, halves away from zero
#[inline]
pub fn round_gpa(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
