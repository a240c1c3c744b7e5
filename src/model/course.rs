//! Sections and classes

use serde::{Deserialize, Serialize};

use super::Assignment;
use crate::grading::LetterBand;

fn default_weight() -> f64 {
    1.0
}

/// A weighted group of assignments within a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub name: String,
    /// Fraction of the owning class's total; siblings need not sum to 1
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Section {
    pub fn new(weight: f64, assignments: Vec<Assignment>) -> Self {
        Self {
            name: String::new(),
            weight,
            assignments,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// A class: weighted sections plus the letter bands used to grade it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Scanned in list order; see [`crate::grading::letter_for`]
    #[serde(default)]
    pub letter_grading: Vec<LetterBand>,
}

impl Class {
    pub fn new(sections: Vec<Section>, letter_grading: Vec<LetterBand>) -> Self {
        Self {
            name: String::new(),
            sections,
            letter_grading,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
