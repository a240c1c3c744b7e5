//! Assignment records and the graded/ungraded score model

use serde::{Deserialize, Serialize};

/// Value the persistence layer stores in either field of an ungraded assignment
pub const UNGRADED_SENTINEL: f64 = -1.0;

/// How the UI entered an assignment's mark. Has no effect on arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssignmentKind {
    #[default]
    Percentage,
    Ratio,
}

/// Mark of a single assignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    /// Scored; `denominator > 0` is assumed, not checked
    Graded { numerator: f64, denominator: f64 },
    /// Awaiting a score
    Ungraded,
}

impl Mark {
    /// Build a mark from the persisted pair, mapping the `-1` sentinel on
    /// either field to [`Mark::Ungraded`]
    #[inline]
    pub fn from_raw(numerator: f64, denominator: f64) -> Self {
        if numerator == UNGRADED_SENTINEL || denominator == UNGRADED_SENTINEL {
            Mark::Ungraded
        } else {
            Mark::Graded {
                numerator,
                denominator,
            }
        }
    }

    /// Persisted pair for this mark
    #[inline]
    pub fn to_raw(self) -> (f64, f64) {
        match self {
            Mark::Graded {
                numerator,
                denominator,
            } => (numerator, denominator),
            Mark::Ungraded => (UNGRADED_SENTINEL, UNGRADED_SENTINEL),
        }
    }
}

/// Persisted shape of an assignment: `{numerator, denominator, type}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawAssignment {
    #[serde(default)]
    name: String,
    numerator: f64,
    denominator: f64,
    #[serde(rename = "type", default)]
    kind: AssignmentKind,
}

/// A single assignment inside a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAssignment", into = "RawAssignment")]
pub struct Assignment {
    pub name: String,
    pub mark: Mark,
    pub kind: AssignmentKind,
}

impl From<RawAssignment> for Assignment {
    fn from(raw: RawAssignment) -> Self {
        Self {
            name: raw.name,
            mark: Mark::from_raw(raw.numerator, raw.denominator),
            kind: raw.kind,
        }
    }
}

impl From<Assignment> for RawAssignment {
    fn from(assignment: Assignment) -> Self {
        let (numerator, denominator) = assignment.mark.to_raw();
        Self {
            name: assignment.name,
            numerator,
            denominator,
            kind: assignment.kind,
        }
    }
}

impl Assignment {
    /// Create a graded assignment
    pub fn graded(numerator: f64, denominator: f64) -> Self {
        Self {
            name: String::new(),
            mark: Mark::Graded {
                numerator,
                denominator,
            },
            kind: AssignmentKind::Ratio,
        }
    }

    /// Create a graded percentage assignment (`percent` out of 100)
    pub fn percentage(percent: f64) -> Self {
        Self {
            kind: AssignmentKind::Percentage,
            ..Self::graded(percent, 100.0)
        }
    }

    /// Create an ungraded assignment
    pub fn ungraded() -> Self {
        Self {
            name: String::new(),
            mark: Mark::Ungraded,
            kind: AssignmentKind::Percentage,
        }
    }

    /// Attach a display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn is_graded(&self) -> bool {
        matches!(self.mark, Mark::Graded { .. })
    }

    /// Fractional score `numerator / denominator`, or `None` when ungraded.
    ///
    /// Not clamped; a zero denominator yields NaN or infinity.
    #[inline]
    pub fn score(&self) -> Option<f64> {
        match self.mark {
            Mark::Graded {
                numerator,
                denominator,
            } => Some(numerator / denominator),
            Mark::Ungraded => None,
        }
    }
}

/// Graded assignments of `assignments`, in their original order
pub fn valid_assignments(assignments: &[Assignment]) -> Vec<&Assignment> {
    assignments.iter().filter(|a| a.is_graded()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_on_either_field_is_ungraded() {
        assert_eq!(Mark::from_raw(-1.0, 10.0), Mark::Ungraded);
        assert_eq!(Mark::from_raw(7.0, -1.0), Mark::Ungraded);
        assert_eq!(Mark::from_raw(-1.0, -1.0), Mark::Ungraded);
        assert!(matches!(Mark::from_raw(0.0, 10.0), Mark::Graded { .. }));
    }

    #[test]
    fn test_score() {
        assert_eq!(Assignment::graded(8.0, 10.0).score(), Some(0.8));
        assert_eq!(Assignment::percentage(95.0).score(), Some(0.95));
        assert_eq!(Assignment::ungraded().score(), None);
    }

    #[test]
    fn test_score_not_clamped() {
        assert_eq!(Assignment::graded(11.0, 10.0).score(), Some(1.1));
    }

    #[test]
    fn test_zero_denominator_propagates() {
        let score = Assignment::graded(5.0, 0.0).score().unwrap();
        assert!(score.is_infinite());
    }

    #[test]
    fn test_valid_assignments_preserves_order() {
        let list = vec![
            Assignment::graded(1.0, 2.0).named("a"),
            Assignment::ungraded().named("b"),
            Assignment::graded(3.0, 4.0).named("c"),
        ];
        let valid: Vec<&str> = valid_assignments(&list)
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(valid, vec!["a", "c"]);
    }

    #[test]
    fn test_deserialize_sentinel() {
        let json = r#"{"numerator": -1, "denominator": -1, "type": "Ratio"}"#;
        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.mark, Mark::Ungraded);
        assert_eq!(assignment.kind, AssignmentKind::Ratio);
    }

    #[test]
    fn test_serialize_ungraded_writes_sentinel() {
        let value = serde_json::to_value(Assignment::ungraded()).unwrap();
        assert_eq!(value["numerator"], -1.0);
        assert_eq!(value["denominator"], -1.0);
        assert_eq!(value["type"], "Percentage");
    }
}
