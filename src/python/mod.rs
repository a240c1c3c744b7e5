//! Python bindings
//!
//! Entry points for the UI layer. Each call evaluates the snapshot it is
//! given; nothing is cached between calls.

mod extract;
mod session;

pub use extract::*;
pub use session::*;

use pyo3::prelude::*;

use crate::grading;
use crate::hierarchy::walk_profile;

/// Evaluate a profile (dict, object or JSON string)
///
/// # Returns
/// A ProfileSession holding every level's averages, letters and GPAs
#[pyfunction]
fn evaluate_profile(py: Python<'_>, profile: &Bound<'_, PyAny>) -> PyResult<ProfileSession> {
    let profile = extract_profile(profile)?;
    let report = py.detach(|| walk_profile(&profile));
    Ok(ProfileSession::new(report))
}

/// Evaluate a profile on a blocking thread
///
/// # Returns
/// A Python awaitable that resolves to a ProfileSession
///
/// # Example (Python)
/// ```python
/// session = await evaluate_profile_async(profile)
/// print(session.cumulative_gpa)
/// ```
#[pyfunction]
fn evaluate_profile_async<'py>(
    py: Python<'py>,
    profile: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyAny>> {
    // Extract while holding the GIL
    let profile = extract_profile(profile)?;

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let report = tokio::task::spawn_blocking(move || walk_profile(&profile))
            .await
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Evaluation task panicked: {}",
                    e
                ))
            })?;

        Ok(ProfileSession::new(report))
    })
}

/// Letter for a percentage under an ordered band list, or None
#[pyfunction]
#[pyo3(name = "letter_for")]
fn py_letter_for<'py>(bands: Vec<Bound<'py, PyAny>>, pct: f64) -> PyResult<Option<String>> {
    let bands = extract_bands(&bands)?;
    Ok(grading::letter_for(&bands, pct).map(str::to_string))
}

/// GPA points for a letter, or None if the letter is not on the scale
#[pyfunction]
#[pyo3(name = "gpa_points")]
fn py_gpa_points(letter: &str) -> Option<f64> {
    grading::gpa_points(letter)
}

/// Register the module's functions and classes
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(evaluate_profile, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_profile_async, m)?)?;
    m.add_function(wrap_pyfunction!(py_letter_for, m)?)?;
    m.add_function(wrap_pyfunction!(py_gpa_points, m)?)?;
    m.add_class::<ProfileSession>()?;
    Ok(())
}
