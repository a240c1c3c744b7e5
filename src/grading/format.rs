//! Display strings for results handed to the UI

/// Literal shown wherever a result is undefined
pub const NOT_AVAILABLE: &str = "N/A";

/// `0.8542` renders as `"85.42%"`
pub fn format_percentage(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("{:.2}%", avg * 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_gpa(gpa: Option<f64>) -> String {
    match gpa {
        Some(gpa) => format!("{:.2}", gpa),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_letter(letter: Option<&str>) -> String {
    letter.unwrap_or(NOT_AVAILABLE).to_string()
}
