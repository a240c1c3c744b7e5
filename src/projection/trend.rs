//! Least-squares trend over a section's graded assignments
//!
//! Positions are 1-based over the full assignment list, so ungraded entries
//! still occupy an x slot even though they do not contribute a point.

use crate::model::Assignment;

/// Fitted trend line used to forecast ungraded scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendLine {
    /// Single graded point; the forecast is that score everywhere
    Flat(f64),
    /// Ordinary least-squares fit over two or more graded points
    Linear { slope: f64, intercept: f64 },
}

impl TrendLine {
    /// Forecast score at 1-based `position`
    #[inline]
    pub fn forecast(&self, position: usize) -> f64 {
        match *self {
            TrendLine::Flat(score) => score,
            TrendLine::Linear { slope, intercept } => slope * position as f64 + intercept,
        }
    }

    /// Slope of the line; `None` for the single-point case
    pub fn slope(&self) -> Option<f64> {
        match *self {
            TrendLine::Flat(_) => None,
            TrendLine::Linear { slope, .. } => Some(slope),
        }
    }
}

/// `(position, score)` for every graded assignment, positions 1-based
fn graded_points(assignments: &[Assignment]) -> Vec<(f64, f64)> {
    assignments
        .iter()
        .enumerate()
        .filter_map(|(i, a)| a.score().map(|y| ((i + 1) as f64, y)))
        .collect()
}

/// Fit a trend over the graded subset of `assignments`.
///
/// Returns `None` when nothing is graded.
pub fn fit_trend(assignments: &[Assignment]) -> Option<TrendLine> {
    let points = graded_points(assignments);

    match points.len() {
        0 => None,
        1 => Some(TrendLine::Flat(points[0].1)),
        len => {
            let n = len as f64;
            let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
            for &(x, y) in &points {
                sum_x += x;
                sum_y += y;
                sum_xy += x * y;
                sum_xx += x * x;
            }

            // Positions are distinct, so the denominator is never zero here
            let slope = (sum_xy - (sum_x * sum_y) / n) / (sum_xx - (sum_x * sum_x) / n);
            let intercept = (sum_y - slope * sum_x) / n;

            Some(TrendLine::Linear { slope, intercept })
        }
    }
}

/// Per-position scores with ungraded entries replaced by the trend forecast.
///
/// Graded entries keep their own score. `None` when nothing is graded.
pub fn projected_scores(assignments: &[Assignment]) -> Option<Vec<f64>> {
    let trend = fit_trend(assignments)?;

    Some(
        assignments
            .iter()
            .enumerate()
            .map(|(i, a)| a.score().unwrap_or_else(|| trend.forecast(i + 1)))
            .collect(),
    )
}

/// Forecast for each ungraded assignment as `(index, forecast)`, index 0-based
pub fn ungraded_forecasts(assignments: &[Assignment]) -> Vec<(usize, f64)> {
    let Some(trend) = fit_trend(assignments) else {
        return Vec::new();
    };

    assignments
        .iter()
        .enumerate()
        .filter(|(_, a)| !a.is_graded())
        .map(|(i, _)| (i, trend.forecast(i + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_graded_points() {
        let list = vec![Assignment::ungraded(), Assignment::ungraded()];
        assert_eq!(fit_trend(&list), None);
        assert_eq!(projected_scores(&list), None);
        assert!(ungraded_forecasts(&list).is_empty());
    }

    #[test]
    fn test_single_point_is_flat() {
        let list = vec![
            Assignment::ungraded(),
            Assignment::graded(7.0, 10.0),
            Assignment::ungraded(),
        ];
        let trend = fit_trend(&list).unwrap();
        assert_eq!(trend, TrendLine::Flat(0.7));
        assert_eq!(trend.slope(), None);
        assert_eq!(projected_scores(&list).unwrap(), vec![0.7, 0.7, 0.7]);
    }

    #[test]
    fn test_linear_fit_uses_original_positions() {
        // Points at x = 1 and x = 3 (x = 2 is ungraded)
        let list = vec![
            Assignment::percentage(60.0),
            Assignment::ungraded(),
            Assignment::percentage(80.0),
            Assignment::ungraded(),
        ];
        let trend = fit_trend(&list).unwrap();
        let TrendLine::Linear { slope, intercept } = trend else {
            panic!("expected linear fit");
        };
        assert!(approx(slope, 0.1));
        assert!(approx(intercept, 0.5));

        let projected = projected_scores(&list).unwrap();
        assert!(approx(projected[1], 0.7));
        assert!(approx(projected[3], 0.9));

        let forecasts = ungraded_forecasts(&list);
        assert_eq!(forecasts.len(), 2);
        assert_eq!(forecasts[0].0, 1);
        assert_eq!(forecasts[1].0, 3);
        assert!(approx(forecasts[1].1, 0.9));
    }

    #[test]
    fn test_graded_scores_not_smoothed() {
        let list = vec![
            Assignment::percentage(50.0),
            Assignment::percentage(90.0),
            Assignment::percentage(70.0),
        ];
        assert_eq!(projected_scores(&list).unwrap(), vec![0.5, 0.9, 0.7]);
    }

    #[test]
    fn test_forecast_not_clamped() {
        let list = vec![
            Assignment::percentage(80.0),
            Assignment::percentage(100.0),
            Assignment::ungraded(),
        ];
        let projected = projected_scores(&list).unwrap();
        assert!(approx(projected[2], 1.2));
    }
}
