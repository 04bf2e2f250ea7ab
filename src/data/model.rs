use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Record – one data row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog row, values kept as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number within the tabular section (header is line 1).
    pub line: usize,
    /// column_name → raw field value.
    pub fields: BTreeMap<String, String>,
}

impl Record {
    /// Raw value of a column, if the header declared it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Catalog – the parsed table
// ---------------------------------------------------------------------------

/// Parsed tabular section: header order plus one [`Record`] per row.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Column names in header order.
    pub column_names: Vec<String>,
    pub records: Vec<Record>,
    /// Number of data rows seen, including skipped ones.
    pub rows_read: usize,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// YearCount / Series – aggregated events per year
// ---------------------------------------------------------------------------

/// Number of events observed in one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

impl fmt::Display for YearCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.year, self.count)
    }
}

/// Year counts sorted strictly ascending by year.
///
/// Only built by the aggregator, so the ordering invariant always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Series {
    points: Vec<YearCount>,
}

impl Series {
    pub(crate) fn from_sorted(points: Vec<YearCount>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].year < w[1].year));
        Series { points }
    }

    pub fn points(&self) -> &[YearCount] {
        &self.points
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.year).collect()
    }

    /// Observed counts in year order.
    pub fn counts(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.count).collect()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| p.count).sum()
    }

    /// Number of distinct years.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
