use std::path::Path;

use log::{info, warn};

use crate::data::aggregate::{count_by_year, extract_years};
use crate::data::date::DATE_COLUMN;
use crate::data::loader::{load_catalog, read_catalog};
use crate::data::model::Series;
use crate::error::{Result, RowWarning};
use crate::regression::RegressionModel;

// ---------------------------------------------------------------------------
// Batch run: parse → aggregate → regress
// ---------------------------------------------------------------------------

/// Everything known about a catalog before the regression step.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Column names in header order.
    pub column_names: Vec<String>,
    /// Data rows seen after the header.
    pub rows_read: usize,
    /// Rows that contributed a year to the series.
    pub rows_used: usize,
    pub series: Series,
    /// Row-level problems, in file order per stage.
    pub warnings: Vec<RowWarning>,
}

impl Summary {
    pub fn rows_skipped(&self) -> usize {
        self.rows_read - self.rows_used
    }

    /// Emit each collected warning through the `log` facade.
    pub fn log_warnings(&self) {
        for w in &self.warnings {
            warn!("{w}");
        }
    }
}

/// A summary together with its fitted trend.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub summary: Summary,
    pub model: RegressionModel,
}

/// Locate the table in `content`, parse it and count events per year.
pub fn summarize(content: &str) -> Result<Summary> {
    let (catalog, mut warnings) = load_catalog(content)?;
    let (years, date_warnings) = extract_years(&catalog, DATE_COLUMN);
    warnings.extend(date_warnings);

    let rows_used = years.len();
    let series = count_by_year(years);
    info!(
        "{rows_used} dated events over {} distinct years",
        series.len()
    );

    Ok(Summary {
        column_names: catalog.column_names,
        rows_read: catalog.rows_read,
        rows_used,
        series,
        warnings,
    })
}

/// Fit the trend on top of an existing summary.
pub fn fit(summary: Summary) -> Result<Analysis> {
    let model = RegressionModel::fit(&summary.series)?;
    Ok(Analysis { summary, model })
}

/// Full pipeline over in-memory catalog text.
pub fn analyze(content: &str) -> Result<Analysis> {
    fit(summarize(content)?)
}

/// Full pipeline over a catalog file.
pub fn run(path: &Path) -> Result<Analysis> {
    analyze(&read_catalog(path)?)
}
