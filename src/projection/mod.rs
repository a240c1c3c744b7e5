//! Trend projection for ungraded assignments

mod trend;


pub use trend::*;
