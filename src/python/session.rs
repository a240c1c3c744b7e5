//! ProfileSession - evaluated profile held on the Rust side
//!
//! Python keeps a handle to the report and pulls the levels it displays.
//! N/A figures surface as `None`.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::hierarchy::{ClassReport, ProfileReport, SectionReport, SemesterReport, YearReport};

// ============================================================================
// Dict conversion
// ============================================================================

fn section_to_dict<'py>(py: Python<'py>, section: &SectionReport) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", &section.name)?;
    dict.set_item("weight", section.weight)?;
    dict.set_item("actual_average", section.actual_average)?;
    dict.set_item("expected_average", section.expected_average)?;
    dict.set_item("graded_count", section.graded_count)?;
    dict.set_item("total_count", section.total_count)?;

    let projections = PyDict::new(py);
    for projection in &section.projections {
        projections.set_item(projection.index, projection.forecast)?;
    }
    dict.set_item("projections", projections)?;
    Ok(dict)
}

fn class_to_dict<'py>(
    py: Python<'py>,
    class: &ClassReport,
    with_sections: bool,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", &class.name)?;
    dict.set_item("actual_average", class.actual_average)?;
    dict.set_item("expected_average", class.expected_average)?;
    dict.set_item("letter_grade", class.letter_grade.as_deref())?;
    dict.set_item("expected_letter_grade", class.expected_letter_grade.as_deref())?;

    if with_sections {
        let sections = PyList::empty(py);
        for section in &class.sections {
            sections.append(section_to_dict(py, section)?)?;
        }
        dict.set_item("sections", sections)?;
    }
    Ok(dict)
}

fn semester_to_dict<'py>(py: Python<'py>, semester: &SemesterReport) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", &semester.name)?;
    dict.set_item("gpa", semester.gpa)?;
    dict.set_item("expected_gpa", semester.expected_gpa)?;

    let classes = PyList::empty(py);
    for class in &semester.classes {
        classes.append(class_to_dict(py, class, false)?)?;
    }
    dict.set_item("classes", classes)?;
    Ok(dict)
}

fn year_to_dict<'py>(py: Python<'py>, year: &YearReport) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", &year.name)?;
    dict.set_item("gpa", year.gpa)?;
    dict.set_item("expected_gpa", year.expected_gpa)?;

    let semesters = PyList::empty(py);
    for semester in &year.semesters {
        semesters.append(semester_to_dict(py, semester)?)?;
    }
    dict.set_item("semesters", semesters)?;
    Ok(dict)
}

// ============================================================================
// ProfileSession PyClass
// ============================================================================

/// Evaluated profile; read-only once built
#[pyclass]
pub struct ProfileSession {
    report: ProfileReport,
}

impl ProfileSession {
    pub fn new(report: ProfileReport) -> Self {
        Self { report }
    }

    pub fn report(&self) -> &ProfileReport {
        &self.report
    }
}

#[pymethods]
impl ProfileSession {
    #[getter]
    fn name(&self) -> &str {
        &self.report.name
    }

    #[getter]
    fn cumulative_gpa(&self) -> Option<f64> {
        self.report.cumulative_gpa
    }

    #[getter]
    fn expected_cumulative_gpa(&self) -> Option<f64> {
        self.report.expected_cumulative_gpa
    }

    #[getter]
    fn total_years(&self) -> usize {
        self.report.years.len()
    }

    #[getter]
    fn total_classes(&self) -> usize {
        self.report.class_count()
    }

    /// Year dict (with semesters and class summaries) or None if out of bounds
    fn get_year(&self, py: Python<'_>, index: usize) -> PyResult<Py<PyAny>> {
        match self.report.year(index) {
            Some(year) => Ok(year_to_dict(py, year)?.into_any().unbind()),
            None => Ok(py.None()),
        }
    }

    /// Semester dict or None if out of bounds
    fn get_semester(&self, py: Python<'_>, year: usize, semester: usize) -> PyResult<Py<PyAny>> {
        match self.report.semester(year, semester) {
            Some(semester) => Ok(semester_to_dict(py, semester)?.into_any().unbind()),
            None => Ok(py.None()),
        }
    }

    /// Class dict including its sections, or None if out of bounds
    fn get_class(
        &self,
        py: Python<'_>,
        year: usize,
        semester: usize,
        class: usize,
    ) -> PyResult<Py<PyAny>> {
        match self.report.class(year, semester, class) {
            Some(class) => Ok(class_to_dict(py, class, true)?.into_any().unbind()),
            None => Ok(py.None()),
        }
    }

    /// Top-level figures plus every year
    fn get_summary(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let dict = PyDict::new(py);
        dict.set_item("name", &self.report.name)?;
        dict.set_item("cumulative_gpa", self.report.cumulative_gpa)?;
        dict.set_item("expected_cumulative_gpa", self.report.expected_cumulative_gpa)?;

        let years = PyList::empty(py);
        for year in &self.report.years {
            years.append(year_to_dict(py, year)?)?;
        }
        dict.set_item("years", years)?;
        Ok(dict.into_any().unbind())
    }

    /// Full report as JSON, N/A as `null`
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.report)
            .map_err(|e| crate::error::GradebookError::from(e).into())
    }
}
