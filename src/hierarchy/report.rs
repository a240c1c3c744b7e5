//! Per-level evaluation results
//!
//! `None` in any figure means N/A.

use serde::Serialize;

/// Forecast shown next to an ungraded assignment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedAssignment {
    /// 0-based index in the section's assignment list
    pub index: usize,
    pub forecast: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub name: String,
    pub weight: f64,
    pub actual_average: Option<f64>,
    pub expected_average: Option<f64>,
    pub graded_count: usize,
    pub total_count: usize,
    pub projections: Vec<ProjectedAssignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    pub name: String,
    pub actual_average: Option<f64>,
    pub expected_average: Option<f64>,
    pub letter_grade: Option<String>,
    pub expected_letter_grade: Option<String>,
    pub sections: Vec<SectionReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterReport {
    pub name: String,
    pub gpa: Option<f64>,
    pub expected_gpa: Option<f64>,
    pub classes: Vec<ClassReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearReport {
    pub name: String,
    pub gpa: Option<f64>,
    pub expected_gpa: Option<f64>,
    pub semesters: Vec<SemesterReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub name: String,
    pub cumulative_gpa: Option<f64>,
    pub expected_cumulative_gpa: Option<f64>,
    pub years: Vec<YearReport>,
}

impl ProfileReport {
    pub fn year(&self, index: usize) -> Option<&YearReport> {
        self.years.get(index)
    }

    pub fn semester(&self, year: usize, semester: usize) -> Option<&SemesterReport> {
        self.year(year)?.semesters.get(semester)
    }

    pub fn class(&self, year: usize, semester: usize, class: usize) -> Option<&ClassReport> {
        self.semester(year, semester)?.classes.get(class)
    }

    /// Number of classes across the whole profile
    pub fn class_count(&self) -> usize {
        self.years
            .iter()
            .flat_map(|y| &y.semesters)
            .map(|s| s.classes.len())
            .sum()
    }
}
