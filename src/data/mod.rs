/// Data layer: header location, row parsing, date normalisation and
/// per-year aggregation.
///
/// Architecture:
/// ```text
///   catalog .csv (preamble + table)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  locate "Fecha," header → Catalog of Records
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   date    │  free-form date → year (first matching format wins)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  years → Series of (year, count), ascending
///   └───────────┘
/// ```

pub mod aggregate;
pub mod date;
pub mod loader;
pub mod model;
