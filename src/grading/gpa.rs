//! Letter grades from averages and GPAs from letters

use super::{gpa_points, letter_for, round_gpa, LetterBand};

/// Letter for a class average in `[0, 1]` form; N/A propagates
#[inline]
pub fn letter_from_average(bands: &[LetterBand], average: Option<f64>) -> Option<&str> {
    letter_for(bands, average? * 100.0)
}

/// Projected letter, defined only when the actual letter is defined
pub fn expected_letter_from_average<'a>(
    bands: &'a [LetterBand],
    actual_letter: Option<&str>,
    expected_average: Option<f64>,
) -> Option<&'a str> {
    actual_letter?;
    letter_from_average(bands, expected_average)
}

/// Rounded mean of the points of the defined letters.
///
/// Letters outside the scale are skipped like N/A ones. `None` when no
/// letter contributes.
pub fn gpa_from_letters<'a, I>(letters: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut total = 0.0;
    let mut count = 0usize;

    for letter in letters.into_iter().flatten() {
        match gpa_points(letter) {
            Some(points) => {
                total += points;
                count += 1;
            }
            None => tracing::warn!(letter, "letter grade is not on the GPA scale, skipping"),
        }
    }

    if count == 0 {
        return None;
    }
    Some(round_gpa(total / count as f64))
}

/// Rounded mean of the defined GPAs one level down
pub fn mean_gpa<I>(gpas: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let valid: Vec<f64> = gpas.into_iter().flatten().collect();
    crate::aggregate::mean(&valid).map(round_gpa)
}

/// Expected GPA, defined only when the actual GPA is defined
#[inline]
pub fn expected_gpa(actual: Option<f64>, expected: Option<f64>) -> Option<f64> {
    actual.and(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_from_average() {
        let bands = LetterBand::standard_scale();
        assert_eq!(letter_from_average(&bands, Some(0.85)), Some("B"));
        assert_eq!(letter_from_average(&bands, Some(1.0)), Some("A"));
        assert_eq!(letter_from_average(&bands, None), None);
    }

    #[test]
    fn test_expected_letter_requires_actual() {
        let bands = LetterBand::standard_scale();
        assert_eq!(expected_letter_from_average(&bands, None, Some(0.95)), None);
        assert_eq!(
            expected_letter_from_average(&bands, Some("B"), Some(0.95)),
            Some("A")
        );
        assert_eq!(expected_letter_from_average(&bands, Some("B"), Some(1.3)), None);
    }

    #[test]
    fn test_gpa_from_letters_skips_na() {
        let gpa = gpa_from_letters([Some("A"), Some("B"), None]);
        assert_eq!(gpa, Some(3.5));
    }

    #[test]
    fn test_gpa_from_letters_all_na() {
        assert_eq!(gpa_from_letters([None, None]), None);
        assert_eq!(gpa_from_letters(std::iter::empty()), None);
    }

    #[test]
    fn test_gpa_from_letters_skips_unknown() {
        assert_eq!(gpa_from_letters([Some("A+"), Some("B")]), Some(3.0));
        assert_eq!(gpa_from_letters([Some("Pass")]), None);
    }

    #[test]
    fn test_gpa_from_letters_rounds() {
        // (4.0 + 3.7 + 3.3) / 3 = 3.6666...
        assert_eq!(gpa_from_letters([Some("A"), Some("A-"), Some("B+")]), Some(3.67));
    }

    #[test]
    fn test_mean_gpa() {
        assert_eq!(mean_gpa([Some(3.5), None, Some(3.0)]), Some(3.25));
        assert_eq!(mean_gpa([None]), None);
        assert_eq!(mean_gpa([Some(3.33), Some(3.0), Some(3.0)]), Some(3.11));
    }

    #[test]
    fn test_expected_gpa_gate() {
        assert_eq!(expected_gpa(None, Some(3.9)), None);
        assert_eq!(expected_gpa(Some(3.0), Some(3.9)), Some(3.9));
        assert_eq!(expected_gpa(Some(3.0), None), None);
    }
}
