//! Hierarchy walker

use tracing::{debug, trace};

use crate::aggregate::{
    class_actual_average, class_expected_average, section_actual_average,
    section_expected_average, unweighted_expected_average, weighted_actual_average,
};
use crate::grading::{
    expected_gpa, expected_letter_from_average, gpa_from_letters, letter_from_average, mean_gpa,
};
use crate::model::{Class, Profile, Section, Semester, Year};
use crate::projection::ungraded_forecasts;

use super::{
    ClassReport, ProfileReport, ProjectedAssignment, SectionReport, SemesterReport, YearReport,
};

/// Evaluate a section from its assignments
pub fn walk_section(section: &Section) -> SectionReport {
    let assignments = &section.assignments;
    let actual_average = section_actual_average(assignments);
    let expected_average = section_expected_average(assignments);
    let graded_count = assignments.iter().filter(|a| a.is_graded()).count();

    trace!(
        section = %section.name,
        weight = section.weight,
        graded = graded_count,
        total = assignments.len(),
        ?actual_average,
        ?expected_average,
        "section evaluated"
    );

    SectionReport {
        name: section.name.clone(),
        weight: section.weight,
        actual_average,
        expected_average,
        graded_count,
        total_count: assignments.len(),
        projections: ungraded_forecasts(assignments)
            .into_iter()
            .map(|(index, forecast)| ProjectedAssignment { index, forecast })
            .collect(),
    }
}

/// Evaluate a class from its section reports
pub fn walk_class(class: &Class) -> ClassReport {
    let sections: Vec<SectionReport> = class.sections.iter().map(walk_section).collect();

    let actual_pairs: Vec<(Option<f64>, f64)> = sections
        .iter()
        .map(|s| (s.actual_average, s.weight))
        .collect();
    let expected: Vec<Option<f64>> = sections.iter().map(|s| s.expected_average).collect();

    let actual_average = weighted_actual_average(&actual_pairs);
    let expected_average = unweighted_expected_average(&expected);

    let bands = &class.letter_grading;
    let letter_grade = letter_from_average(bands, actual_average);
    let expected_letter_grade =
        expected_letter_from_average(bands, letter_grade, expected_average);

    debug!(
        class = %class.name,
        ?actual_average,
        ?expected_average,
        ?letter_grade,
        ?expected_letter_grade,
        "class evaluated"
    );

    ClassReport {
        name: class.name.clone(),
        actual_average,
        expected_average,
        letter_grade: letter_grade.map(str::to_string),
        expected_letter_grade: expected_letter_grade.map(str::to_string),
        sections,
    }
}

/// Evaluate a semester from its class reports
pub fn walk_semester(semester: &Semester) -> SemesterReport {
    let classes: Vec<ClassReport> = semester.classes.iter().map(walk_class).collect();

    let gpa = gpa_from_letters(classes.iter().map(|c| c.letter_grade.as_deref()));
    let expected = gpa_from_letters(classes.iter().map(|c| c.expected_letter_grade.as_deref()));
    let expected_gpa = expected_gpa(gpa, expected);

    debug!(semester = %semester.name, classes = classes.len(), ?gpa, ?expected_gpa, "semester evaluated");

    SemesterReport {
        name: semester.name.clone(),
        gpa,
        expected_gpa,
        classes,
    }
}

/// Evaluate a year from its semester reports
pub fn walk_year(year: &Year) -> YearReport {
    let semesters: Vec<SemesterReport> = year.semesters.iter().map(walk_semester).collect();

    let gpa = mean_gpa(semesters.iter().map(|s| s.gpa));
    let expected_gpa = expected_gpa(gpa, mean_gpa(semesters.iter().map(|s| s.expected_gpa)));

    debug!(year = %year.name, semesters = semesters.len(), ?gpa, ?expected_gpa, "year evaluated");

    YearReport {
        name: year.name.clone(),
        gpa,
        expected_gpa,
        semesters,
    }
}

/// Evaluate the whole profile from its year reports
pub fn walk_profile(profile: &Profile) -> ProfileReport {
    let years: Vec<YearReport> = profile.years.iter().map(walk_year).collect();

    let cumulative_gpa = mean_gpa(years.iter().map(|y| y.gpa));
    let expected_cumulative_gpa =
        expected_gpa(cumulative_gpa, mean_gpa(years.iter().map(|y| y.expected_gpa)));

    debug!(
        profile = %profile.name,
        years = years.len(),
        ?cumulative_gpa,
        ?expected_cumulative_gpa,
        "profile evaluated"
    );

    ProfileReport {
        name: profile.name.clone(),
        cumulative_gpa,
        expected_cumulative_gpa,
        years,
    }
}

// ============================================================================
// Record-level entry points
// ============================================================================

/// Letter grade of a class from its actual average
pub fn class_letter_grade(class: &Class) -> Option<&str> {
    letter_from_average(&class.letter_grading, class_actual_average(&class.sections))
}

/// Projected letter grade of a class; N/A whenever the actual letter is
pub fn expected_class_letter_grade(class: &Class) -> Option<&str> {
    expected_letter_from_average(
        &class.letter_grading,
        class_letter_grade(class),
        class_expected_average(&class.sections),
    )
}

pub fn semester_gpa(semester: &Semester) -> Option<f64> {
    walk_semester(semester).gpa
}

pub fn expected_semester_gpa(semester: &Semester) -> Option<f64> {
    walk_semester(semester).expected_gpa
}

pub fn year_gpa(year: &Year) -> Option<f64> {
    walk_year(year).gpa
}

pub fn expected_year_gpa(year: &Year) -> Option<f64> {
    walk_year(year).expected_gpa
}

pub fn cumulative_gpa(profile: &Profile) -> Option<f64> {
    walk_profile(profile).cumulative_gpa
}

pub fn expected_cumulative_gpa(profile: &Profile) -> Option<f64> {
    walk_profile(profile).expected_cumulative_gpa
}

impl Section {
    pub fn actual_average(&self) -> Option<f64> {
        section_actual_average(&self.assignments)
    }

    pub fn expected_average(&self) -> Option<f64> {
        section_expected_average(&self.assignments)
    }
}

impl Class {
    pub fn actual_average(&self) -> Option<f64> {
        class_actual_average(&self.sections)
    }

    pub fn expected_average(&self) -> Option<f64> {
        class_expected_average(&self.sections)
    }

    pub fn letter_grade(&self) -> Option<&str> {
        class_letter_grade(self)
    }

    pub fn expected_letter_grade(&self) -> Option<&str> {
        expected_class_letter_grade(self)
    }

    pub fn report(&self) -> ClassReport {
        walk_class(self)
    }
}

impl Semester {
    pub fn gpa(&self) -> Option<f64> {
        semester_gpa(self)
    }

    pub fn expected_gpa(&self) -> Option<f64> {
        expected_semester_gpa(self)
    }

    pub fn report(&self) -> SemesterReport {
        walk_semester(self)
    }
}

impl Year {
    pub fn gpa(&self) -> Option<f64> {
        year_gpa(self)
    }

    pub fn expected_gpa(&self) -> Option<f64> {
        expected_year_gpa(self)
    }

    pub fn report(&self) -> YearReport {
        walk_year(self)
    }
}

impl Profile {
    pub fn cumulative_gpa(&self) -> Option<f64> {
        cumulative_gpa(self)
    }

    pub fn expected_cumulative_gpa(&self) -> Option<f64> {
        expected_cumulative_gpa(self)
    }

    pub fn report(&self) -> ProfileReport {
        walk_profile(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::LetterBand;
    use crate::model::Assignment;

    fn class_with(scores: &[f64]) -> Class {
        let assignments = scores.iter().map(|s| Assignment::percentage(*s)).collect();
        Class::new(
            vec![Section::new(1.0, assignments)],
            LetterBand::standard_scale(),
        )
    }

    fn ungraded_class() -> Class {
        Class::new(
            vec![Section::new(1.0, vec![Assignment::ungraded()])],
            LetterBand::standard_scale(),
        )
    }

    #[test]
    fn test_class_letter_grade() {
        assert_eq!(class_letter_grade(&class_with(&[95.0, 97.0])), Some("A"));
        assert_eq!(class_letter_grade(&class_with(&[85.0])), Some("B"));
        assert_eq!(class_letter_grade(&class_with(&[100.0])), Some("A"));
        assert_eq!(class_letter_grade(&ungraded_class()), None);
    }

    #[test]
    fn test_class_with_empty_bands() {
        let class = Class::new(
            vec![Section::new(1.0, vec![Assignment::percentage(85.0)])],
            vec![],
        );
        assert_eq!(class.letter_grade(), None);
        assert_eq!(class.expected_letter_grade(), None);
        assert!(class.actual_average().is_some());
    }

    #[test]
    fn test_semester_gpa_with_na_class() {
        let semester = Semester::new(vec![
            class_with(&[95.0]),
            class_with(&[85.0]),
            ungraded_class(),
        ]);
        assert_eq!(semester_gpa(&semester), Some(3.5));
    }

    #[test]
    fn test_empty_levels_are_na() {
        assert_eq!(semester_gpa(&Semester::default()), None);
        assert_eq!(expected_semester_gpa(&Semester::default()), None);
        assert_eq!(year_gpa(&Year::default()), None);
        assert_eq!(cumulative_gpa(&Profile::default()), None);
        assert_eq!(expected_cumulative_gpa(&Profile::default()), None);
    }

    #[test]
    fn test_all_ungraded_semester_is_na() {
        let semester = Semester::new(vec![ungraded_class(), ungraded_class()]);
        assert_eq!(semester.gpa(), None);
        assert_eq!(semester.expected_gpa(), None);
    }

    #[test]
    fn test_year_and_cumulative_average_valid_entries() {
        let year_one = Year::new(vec![
            Semester::new(vec![class_with(&[95.0])]),
            Semester::new(vec![class_with(&[85.0])]),
            Semester::new(vec![ungraded_class()]),
        ]);
        let year_two = Year::new(vec![Semester::new(vec![class_with(&[75.0])])]);

        assert_eq!(year_one.gpa(), Some(3.5));
        assert_eq!(year_two.gpa(), Some(2.0));

        let profile = Profile::new(vec![year_one, year_two, Year::default()]);
        assert_eq!(profile.cumulative_gpa(), Some(2.75));
    }

    #[test]
    fn test_expected_letter_uses_projection() {
        // Graded 84, 86; trend forecasts 88, 90, 92 for the rest
        let class = Class::new(
            vec![Section::new(
                1.0,
                vec![
                    Assignment::percentage(84.0),
                    Assignment::percentage(86.0),
                    Assignment::ungraded(),
                    Assignment::ungraded(),
                    Assignment::ungraded(),
                ],
            )],
            LetterBand::standard_scale(),
        );
        assert_eq!(class.letter_grade(), Some("B"));
        assert_eq!(class.expected_letter_grade(), Some("B+"));

        let semester = Semester::new(vec![class]);
        assert_eq!(semester.gpa(), Some(3.0));
        assert_eq!(semester.expected_gpa(), Some(3.3));
    }

    #[test]
    fn test_class_report_matches_record_functions() {
        let class = Class::new(
            vec![
                Section::new(0.6, vec![Assignment::graded(18.0, 20.0), Assignment::ungraded()]),
                Section::new(0.4, vec![Assignment::percentage(72.0)]),
                Section::new(0.2, vec![]),
            ],
            LetterBand::standard_scale(),
        )
        .named("Physics");

        let report = walk_class(&class);
        assert_eq!(report.name, "Physics");
        assert_eq!(report.actual_average, class.actual_average());
        assert_eq!(report.expected_average, class.expected_average());
        assert_eq!(report.letter_grade.as_deref(), class.letter_grade());
        assert_eq!(
            report.expected_letter_grade.as_deref(),
            class.expected_letter_grade()
        );
        assert_eq!(report.sections.len(), 3);
        assert_eq!(report.sections[0].projections.len(), 1);
        assert_eq!(report.sections[0].projections[0].index, 1);
        assert_eq!(report.sections[2].actual_average, None);
    }

    #[test]
    fn test_profile_report_navigation() {
        let profile = Profile::new(vec![Year::new(vec![Semester::new(vec![
            class_with(&[91.0]).named("Chemistry"),
            class_with(&[71.0]).named("History"),
        ])])]);

        let report = profile.report();
        assert_eq!(report.class_count(), 2);
        assert_eq!(report.class(0, 0, 1).map(|c| c.name.as_str()), Some("History"));
        assert!(report.class(0, 1, 0).is_none());
        assert!(report.year(3).is_none());
        // A- (3.7) and C- (1.7)
        assert_eq!(report.cumulative_gpa, Some(2.7));
    }
}
