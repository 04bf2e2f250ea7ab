//! Yearly event counts and least-squares trend for seismic catalogs.
//!
//! ```text
//! file ─▶ loader ─▶ date ─▶ aggregate ─▶ regression ─▶ report
//! ```

pub mod cli;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod regression;
pub mod report;

pub use error::{CatalogError, RowWarning, UnparseableDate};
pub use pipeline::{analyze, run, Analysis, Summary};
pub use regression::RegressionModel;
