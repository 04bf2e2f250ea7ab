//! Ordinary least-squares trend of event count against year.
//!
//! Fits `count = slope * year + intercept` with the closed-form normal
//! equations:
//!
//! ```text
//! slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! intercept = (Σy − slope·Σx) / n
//! ```
//!
//! The sums are accumulated in `i128`, so the zero-denominator check is exact.

use crate::data::model::{Series, YearCount};
use crate::error::{CatalogError, Result};

/// Minimum number of distinct years needed to fit a line.
pub const MIN_YEARS: usize = 2;

/// Fitted line `count = slope * year + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionModel {
    /// Fit the model to a year series.
    pub fn fit(series: &Series) -> Result<Self> {
        let n = series.len();
        if n < MIN_YEARS {
            return Err(CatalogError::InsufficientData {
                required: MIN_YEARS,
                actual: n,
            });
        }

        least_squares(series.points())
    }

    /// Predicted count for `year`.
    pub fn predict(&self, year: i32) -> f64 {
        self.slope * f64::from(year) + self.intercept
    }
}

/// Normal-equation solve over raw points.
///
/// A [`Series`] never repeats a year, so the zero-denominator branch is a
/// guard; it only triggers when every point shares the same year.
fn least_squares(points: &[YearCount]) -> Result<RegressionModel> {
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0i128, 0i128, 0i128, 0i128);
    for p in points {
        let x = i128::from(p.year);
        let y = i128::from(p.count);
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let n = points.len() as i128;
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0 {
        return Err(CatalogError::DegenerateRegression);
    }

    let slope = (n * sum_xy - sum_x * sum_y) as f64 / denominator as f64;
    let intercept = (sum_y as f64 - slope * sum_x as f64) / n as f64;

    Ok(RegressionModel { slope, intercept })
}
