//! Academic record types
//!
//! Records are immutable snapshots handed in by the caller. Ungraded marks
//! are an explicit [`Mark::Ungraded`] variant; the persisted `-1` sentinel is
//! translated at the serde boundary.

mod assignment;
mod course;
mod term;

pub use assignment::*;
pub use course::*;
pub use term::*;
