use std::fmt;

use crate::pipeline::{Analysis, Summary};
use crate::regression::RegressionModel;

/// Number of predictions shown in the report.
pub const MAX_PREDICTIONS: usize = 10;

// ---------------------------------------------------------------------------
// Aggregate section
// ---------------------------------------------------------------------------

/// Columns, per-year counts and the distinct years of a [`Summary`].
pub struct SummaryReport<'a>(pub &'a Summary);

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "Columns detected: {}", summary.column_names.join(", "))?;
        if summary.rows_skipped() > 0 {
            writeln!(
                f,
                "Rows skipped: {} of {}",
                summary.rows_skipped(),
                summary.rows_read
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Events per year:")?;
        for point in summary.series.points() {
            writeln!(f, "{point}")?;
        }

        writeln!(f)?;
        writeln!(f, "Distinct years: {:?}", summary.series.years())?;
        writeln!(f, "Count: {}", summary.series.len())
    }
}

// ---------------------------------------------------------------------------
// Regression section
// ---------------------------------------------------------------------------

/// Coefficients, capped predictions and observed counts.
pub struct ModelReport<'a> {
    pub summary: &'a Summary,
    pub model: &'a RegressionModel,
}

impl fmt::Display for ModelReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model;
        writeln!(f, "Slope (a): {:.4}", model.slope)?;
        writeln!(f, "Intercept (b): {:.4}", model.intercept)?;

        writeln!(f)?;
        writeln!(f, "Predictions (first {MAX_PREDICTIONS}):")?;
        for point in self.summary.series.points().iter().take(MAX_PREDICTIONS) {
            writeln!(
                f,
                "Year {} -> estimated: {:.2} events",
                point.year,
                model.predict(point.year)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Observed counts: {:?}", self.summary.series.counts())
    }
}

// ---------------------------------------------------------------------------
// Full report
// ---------------------------------------------------------------------------

/// Aggregate section, followed by the regression section when a model exists.
pub struct Report<'a> {
    pub summary: &'a Summary,
    pub model: Option<&'a RegressionModel>,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SummaryReport(self.summary))?;
        if let Some(model) = self.model {
            writeln!(f)?;
            let section = ModelReport {
                summary: self.summary,
                model,
            };
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

impl<'a> From<&'a Analysis> for Report<'a> {
    fn from(analysis: &'a Analysis) -> Self {
        Report {
            summary: &analysis.summary,
            model: Some(&analysis.model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analyze;

    #[test]
    fn renders_sections_in_order() {
        let analysis = analyze(
            "preamble\nFecha,Magnitud\n2000-01-01,5.5\n2001-01-01,5.5\n2001-06-01,5.5\n\
             2002-01-01,5.5\n2002-02-01,5.5\n2002-03-01,5.5\n",
        )
        .unwrap();
        let expected = "\
Columns detected: Fecha, Magnitud

Events per year:
2000: 1
2001: 2
2002: 3

Distinct years: [2000, 2001, 2002]
Count: 3

Slope (a): 1.0000
Intercept (b): -1999.0000

Predictions (first 10):
Year 2000 -> estimated: 1.00 events
Year 2001 -> estimated: 2.00 events
Year 2002 -> estimated: 3.00 events

Observed counts: [1, 2, 3]
";
        assert_eq!(Report::from(&analysis).to_string(), expected);
    }

    #[test]
    fn predictions_are_capped() {
        let mut text = String::from("Fecha,Magnitud\n");
        for (i, year) in (1990..2005).enumerate() {
            for _ in 0..=i % 3 {
                text.push_str(&format!("{year}-05-05,5.5\n"));
            }
        }
        let analysis = analyze(&text).unwrap();
        let out = ModelReport {
            summary: &analysis.summary,
            model: &analysis.model,
        }
        .to_string();
        assert_eq!(out.matches("-> estimated").count(), MAX_PREDICTIONS);
        assert!(out.contains("Year 1999 ->"));
        assert!(!out.contains("Year 2000 ->"));
        // observed counts are never capped
        assert_eq!(analysis.summary.series.len(), 15);
    }

    #[test]
    fn without_model_only_aggregates_are_shown() {
        let summary = crate::pipeline::summarize("Fecha,Magnitud\n2010-01-01,5.5\n").unwrap();
        let out = Report {
            summary: &summary,
            model: None,
        }
        .to_string();
        assert!(out.ends_with("Count: 1\n"));
        assert!(!out.contains("Slope"));
    }

    #[test]
    fn skipped_rows_are_mentioned() {
        let analysis =
            analyze("Fecha,Magnitud\n2000-01-01,5.5\nbad,5.5\n2001-01-01,5.5\n").unwrap();
        assert!(SummaryReport(&analysis.summary)
            .to_string()
            .contains("Rows skipped: 1 of 3"));
    }
}
