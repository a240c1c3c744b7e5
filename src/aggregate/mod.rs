//! Section and class averages
//!
//! Every average has an "actual" form (graded data only) and an "expected"
//! form (ungraded entries replaced by the trend forecast). `None` is N/A.

mod class;
mod section;


pub use class::*;
pub use section::*;

/// Arithmetic mean, `None` for an empty slice
#[inline]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
