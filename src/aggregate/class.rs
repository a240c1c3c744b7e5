//! Class-level averages over sections
//!
//! The actual average is weighted by section weight and renormalised over
//! the sections that have data. The expected average is a plain mean of the
//! section expected averages and ignores weights.

use super::{section_actual_average, section_expected_average};
use crate::model::Section;

/// `Σ(avg·w) / Σw` over `(avg, weight)` pairs whose average is defined
pub fn weighted_actual_average(averages: &[(Option<f64>, f64)]) -> Option<f64> {
    let mut weighted_total = 0.0;
    let mut weight_sum = 0.0;
    let mut any = false;

    for &(avg, weight) in averages {
        if let Some(avg) = avg {
            weighted_total += avg * weight;
            weight_sum += weight;
            any = true;
        }
    }

    if !any {
        return None;
    }
    Some(weighted_total / weight_sum)
}

/// Plain mean of the defined expected averages, weights ignored
pub fn unweighted_expected_average(averages: &[Option<f64>]) -> Option<f64> {
    let valid: Vec<f64> = averages.iter().flatten().copied().collect();
    super::mean(&valid)
}

/// Weighted mean of section actual averages over sections with graded work
pub fn class_actual_average(sections: &[Section]) -> Option<f64> {
    let averages: Vec<(Option<f64>, f64)> = sections
        .iter()
        .map(|s| (section_actual_average(&s.assignments), s.weight))
        .collect();
    weighted_actual_average(&averages)
}

/// Unweighted mean of section expected averages
pub fn class_expected_average(sections: &[Section]) -> Option<f64> {
    let averages: Vec<Option<f64>> = sections
        .iter()
        .map(|s| section_expected_average(&s.assignments))
        .collect();
    unweighted_expected_average(&averages)
}
