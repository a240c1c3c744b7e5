//! Record extraction from Python objects
//!
//! Accepts dicts or attribute-style objects with the same field names as the
//! JSON form. Missing optional fields take the serde defaults.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyString};

use crate::config::profile_from_json;
use crate::error::GradebookError;
use crate::grading::LetterBand;
use crate::model::{Assignment, AssignmentKind, Class, Mark, Profile, Section, Semester, Year};

/// Helper to get attribute from either dict or object
fn get_attr<'py>(obj: &Bound<'py, PyAny>, name: &str) -> PyResult<Bound<'py, PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name)?
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    } else {
        obj.getattr(name)
    }
}

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, PyAny>, name: &str) -> Option<Bound<'py, PyAny>> {
    let value = if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    };
    value.filter(|v| !v.is_none())
}

fn get_name(obj: &Bound<'_, PyAny>) -> String {
    get_attr_opt(obj, "name")
        .and_then(|v| v.extract().ok())
        .unwrap_or_default()
}

/// Child records under `field`, empty when the field is missing
fn get_children<'py>(obj: &Bound<'py, PyAny>, field: &str) -> PyResult<Vec<Bound<'py, PyAny>>> {
    match get_attr_opt(obj, field) {
        Some(list) => list.extract(),
        None => Ok(Vec::new()),
    }
}

/// Build a profile from a dict, an object, or a JSON string
pub fn extract_profile(obj: &Bound<'_, PyAny>) -> PyResult<Profile> {
    if let Ok(text) = obj.downcast::<PyString>() {
        return Ok(profile_from_json(text.to_str()?)?);
    }

    let years = get_children(obj, "years")?
        .iter()
        .map(extract_year)
        .collect::<PyResult<Vec<_>>>()?;

    Ok(Profile {
        name: get_name(obj),
        years,
    })
}

fn extract_year(obj: &Bound<'_, PyAny>) -> PyResult<Year> {
    let semesters = get_children(obj, "semesters")?
        .iter()
        .map(extract_semester)
        .collect::<PyResult<Vec<_>>>()?;

    Ok(Year {
        name: get_name(obj),
        semesters,
    })
}

fn extract_semester(obj: &Bound<'_, PyAny>) -> PyResult<Semester> {
    let classes = get_children(obj, "classes")?
        .iter()
        .map(extract_class)
        .collect::<PyResult<Vec<_>>>()?;

    Ok(Semester {
        name: get_name(obj),
        classes,
    })
}

fn extract_class(obj: &Bound<'_, PyAny>) -> PyResult<Class> {
    let sections = get_children(obj, "sections")?
        .iter()
        .map(extract_section)
        .collect::<PyResult<Vec<_>>>()?;
    let letter_grading = extract_bands(&get_children(obj, "letter_grading")?)?;

    Ok(Class {
        name: get_name(obj),
        sections,
        letter_grading,
    })
}

fn extract_section(obj: &Bound<'_, PyAny>) -> PyResult<Section> {
    let weight: f64 = match get_attr_opt(obj, "weight") {
        Some(w) => w.extract()?,
        None => 1.0,
    };
    let assignments = get_children(obj, "assignments")?
        .iter()
        .map(extract_assignment)
        .collect::<PyResult<Vec<_>>>()?;

    Ok(Section {
        name: get_name(obj),
        weight,
        assignments,
    })
}

fn extract_assignment(obj: &Bound<'_, PyAny>) -> PyResult<Assignment> {
    let numerator: f64 = get_attr(obj, "numerator")?.extract()?;
    let denominator: f64 = get_attr(obj, "denominator")?.extract()?;

    let kind = match get_attr_opt(obj, "type") {
        Some(value) => {
            let kind: String = value.extract()?;
            match kind.as_str() {
                "Percentage" => AssignmentKind::Percentage,
                "Ratio" => AssignmentKind::Ratio,
                other => {
                    return Err(GradebookError::InvalidRecord(format!(
                        "unknown assignment type: {}",
                        other
                    ))
                    .into())
                }
            }
        }
        None => AssignmentKind::default(),
    };

    Ok(Assignment {
        name: get_name(obj),
        mark: Mark::from_raw(numerator, denominator),
        kind,
    })
}

/// Letter bands from a list of `{letter, beg, end}` records
pub fn extract_bands(items: &[Bound<'_, PyAny>]) -> PyResult<Vec<LetterBand>> {
    items
        .iter()
        .map(|obj| {
            Ok(LetterBand {
                letter: get_attr(obj, "letter")?.extract()?,
                beg: get_attr(obj, "beg")?.extract()?,
                end: get_attr(obj, "end")?.extract()?,
            })
        })
        .collect()
}
