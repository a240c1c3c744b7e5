//! Letter band lookup

use serde::{Deserialize, Serialize};

/// Letter forced for a score of exactly 100 percent
pub const PERFECT_SCORE_LETTER: &str = "A";

/// Half-open percentage interval `[beg, end)` mapped to a letter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterBand {
    pub letter: String,
    pub beg: f64,
    pub end: f64,
}

impl LetterBand {
    pub fn new(letter: impl Into<String>, beg: f64, end: f64) -> Self {
        Self {
            letter: letter.into(),
            beg,
            end,
        }
    }

    #[inline]
    pub fn contains(&self, pct: f64) -> bool {
        self.beg <= pct && pct < self.end
    }

    /// Default plus/minus scale for newly created classes
    pub fn standard_scale() -> Vec<LetterBand> {
        [
            ("A", 93.0, 100.0),
            ("A-", 90.0, 93.0),
            ("B+", 87.0, 90.0),
            ("B", 83.0, 87.0),
            ("B-", 80.0, 83.0),
            ("C+", 77.0, 80.0),
            ("C", 73.0, 77.0),
            ("C-", 70.0, 73.0),
            ("D+", 67.0, 70.0),
            ("D", 60.0, 67.0),
            ("F", 0.0, 60.0),
        ]
        .into_iter()
        .map(|(letter, beg, end)| LetterBand::new(letter, beg, end))
        .collect()
    }
}

/// Letter for percentage `pct` under `bands`.
///
/// Every band is scanned in list order and the last one containing `pct`
/// wins. `pct == 100` always yields `"A"`. `None` when no band matches.
pub fn letter_for(bands: &[LetterBand], pct: f64) -> Option<&str> {
    if pct == 100.0 {
        return Some(PERFECT_SCORE_LETTER);
    }

    let mut matched = None;
    for band in bands {
        if band.contains(pct) {
            matched = Some(band.letter.as_str());
        }
    }
    matched
}
