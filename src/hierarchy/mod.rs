//! Bottom-up evaluation of the record hierarchy
//!
//! Assignment → Section → Class → Semester → Year → Profile. Each level's
//! figures are computed from the report of the level directly below; nothing
//! reads upward and nothing is cached between calls.

mod report;
mod walker;


pub use report::*;
pub use walker::*;
