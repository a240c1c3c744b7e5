//! Semesters, years and the whole profile

use serde::{Deserialize, Serialize};

use super::Class;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub classes: Vec<Class>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Year {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

/// A student's full academic record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub years: Vec<Year>,
}

impl Semester {
    pub fn new(classes: Vec<Class>) -> Self {
        Self {
            name: String::new(),
            classes,
        }
    }
}

impl Year {
    pub fn new(semesters: Vec<Semester>) -> Self {
        Self {
            name: String::new(),
            semesters,
        }
    }
}

impl Profile {
    pub fn new(years: Vec<Year>) -> Self {
        Self {
            name: String::new(),
            years,
        }
    }
}
