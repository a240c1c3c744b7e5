//! Letter grades and GPA
//!
//! Percentages map to letters through a class's ordered band list, letters
//! map to points through a fixed scale, and GPAs above the class level are
//! means of the GPAs one level down.

mod bands;
mod format;
mod gpa;
mod scale;


pub use bands::*;
pub use format::*;
pub use gpa::*;
pub use scale::*;
