//! Section-level averages

use super::mean;
use crate::model::Assignment;
use crate::projection::projected_scores;

/// Unweighted mean score of the graded assignments; `None` if none are graded
pub fn section_actual_average(assignments: &[Assignment]) -> Option<f64> {
    let scores: Vec<f64> = assignments.iter().filter_map(Assignment::score).collect();
    mean(&scores)
}

/// Unweighted mean over every assignment, forecasting the ungraded ones.
///
/// N/A under the same condition as [`section_actual_average`].
pub fn section_expected_average(assignments: &[Assignment]) -> Option<f64> {
    let scores = projected_scores(assignments)?;
    mean(&scores)
}
