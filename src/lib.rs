//! Gradebook Core - grade aggregation and projection engine
//!
//! Turns a student's academic record (years → semesters → classes →
//! sections → assignments) into averages, letter grades and GPAs at every
//! level, both from graded work alone ("actual") and with ungraded work
//! forecast from the section's score trend ("expected").
//!
//! Every calculation is a pure function of the snapshot passed in. Undefined
//! results are `None` (rendered as `"N/A"`) and propagate upward instead of
//! turning into zero.
//!
//! With the `python` feature the crate also builds as a Python extension
//! module.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod grading;
pub mod hierarchy;
pub mod model;
pub mod projection;

#[cfg(feature = "python")]
pub mod python;

pub use aggregate::{
    class_actual_average, class_expected_average, section_actual_average,
    section_expected_average,
};
pub use error::{GradebookError, Result};
pub use grading::{gpa_points, letter_for, LetterBand, NOT_AVAILABLE};
pub use hierarchy::{
    class_letter_grade, cumulative_gpa, expected_class_letter_grade, expected_cumulative_gpa,
    expected_semester_gpa, expected_year_gpa, semester_gpa, walk_profile, year_gpa,
    ProfileReport,
};
pub use model::{Assignment, AssignmentKind, Class, Mark, Profile, Section, Semester, Year};

// ============================================================================
// Python Module Definition
// ============================================================================

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn gradebook_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)
}
