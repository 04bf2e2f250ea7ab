use std::collections::BTreeMap;

use super::date::normalize_year;
use super::model::{Catalog, Series, YearCount};
use crate::error::RowWarning;

/// Count occurrences of each distinct year.
///
/// Only observed years appear; gaps are not filled with zeros.
pub fn count_by_year<I>(years: I) -> Series
where
    I: IntoIterator<Item = i32>,
{
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for year in years {
        *counts.entry(year).or_default() += 1;
    }
    Series::from_sorted(
        counts
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
    )
}

/// Extract the year of every record's `column`.
///
/// Records whose date cannot be parsed are left out and reported as
/// [`RowWarning::UnparseableDate`].
pub fn extract_years(catalog: &Catalog, column: &str) -> (Vec<i32>, Vec<RowWarning>) {
    let mut years = Vec::with_capacity(catalog.len());
    let mut warnings = Vec::new();

    for record in &catalog.records {
        let raw = record.get(column).unwrap_or("");
        match normalize_year(raw) {
            Ok(year) => years.push(year),
            Err(e) => warnings.push(RowWarning::UnparseableDate {
                line: record.line,
                value: e.value,
            }),
        }
    }

    (years, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn catalog(dates: &[&str]) -> Catalog {
        let records = dates
            .iter()
            .enumerate()
            .map(|(i, d)| Record {
                line: i + 2,
                fields: [("Fecha".to_string(), d.to_string())].into_iter().collect(),
            })
            .collect();
        Catalog {
            column_names: vec!["Fecha".into()],
            records,
            rows_read: dates.len(),
        }
    }

    #[test]
    fn counts_are_sorted_and_unique() {
        let series = count_by_year([2003, 2001, 2003, 2001, 2003, 1999]);
        assert_eq!(
            series.points(),
            &[
                YearCount { year: 1999, count: 1 },
                YearCount { year: 2001, count: 2 },
                YearCount { year: 2003, count: 3 },
            ]
        );
        assert_eq!(series.total(), 6);
    }

    #[test]
    fn missing_years_are_not_filled() {
        let series = count_by_year([1990, 2010]);
        assert_eq!(series.years(), vec![1990, 2010]);
        assert_eq!(series.counts(), vec![1, 1]);
    }

    #[test]
    fn empty_input_gives_empty_series() {
        assert!(count_by_year(std::iter::empty()).is_empty());
    }

    #[test]
    fn unparseable_dates_are_reported_and_skipped() {
        let cat = catalog(&["2020-03-15", "not-a-date", "15/03/2020", "2021-01-01"]);
        let (years, warnings) = extract_years(&cat, "Fecha");
        assert_eq!(years, vec![2020, 2020, 2021]);
        assert_eq!(
            warnings,
            vec![RowWarning::UnparseableDate {
                line: 3,
                value: "not-a-date".into()
            }]
        );

        let series = count_by_year(years);
        assert_eq!(series.total() as usize, cat.len() - warnings.len());
    }
}
