use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info};

use super::model::{Catalog, Record};
use crate::error::{CatalogError, Result, RowWarning};

/// Prefix identifying the real header row of an SSN catalog export.
pub const HEADER_MARKER: &str = "Fecha,";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read the whole catalog into memory.
pub fn read_catalog(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Return the lines from the header row onwards, dropping any preamble.
///
/// The header is the first line starting with [`HEADER_MARKER`] exactly;
/// leading whitespace or a different case does not count.
pub fn locate_header<'a, 'l>(lines: &'l [&'a str]) -> Result<&'l [&'a str]> {
    let idx = lines
        .iter()
        .position(|line| line.starts_with(HEADER_MARKER))
        .ok_or(CatalogError::HeaderNotFound {
            marker: HEADER_MARKER,
        })?;
    info!("header found on line {} of the file", idx + 1);
    Ok(&lines[idx..])
}

/// Parse the located table: first line is the header, each following
/// non-empty line becomes a [`Record`].
///
/// Rows whose field count differs from the header are skipped and reported
/// as [`RowWarning::MalformedRow`].
pub fn parse_records(lines: &[&str]) -> Result<(Catalog, Vec<RowWarning>)> {
    let text = lines.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let column_names: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    debug!("columns: {column_names:?}");

    let mut records = Vec::new();
    let mut warnings = Vec::new();
    let mut rows_read = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let row = result?;
        rows_read += 1;
        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_no + 2);

        if row.len() != column_names.len() {
            warnings.push(RowWarning::MalformedRow {
                line,
                expected: column_names.len(),
                found: row.len(),
            });
            continue;
        }

        let fields: BTreeMap<String, String> = column_names
            .iter()
            .cloned()
            .zip(row.iter().map(str::to_string))
            .collect();
        records.push(Record { line, fields });
    }

    info!(
        "parsed {} of {rows_read} rows ({} malformed)",
        records.len(),
        warnings.len()
    );

    Ok((
        Catalog {
            column_names,
            records,
            rows_read,
        },
        warnings,
    ))
}

/// Header location followed by record parsing over raw file content.
pub fn load_catalog(content: &str) -> Result<(Catalog, Vec<RowWarning>)> {
    let lines: Vec<&str> = content.lines().collect();
    let table = locate_header(&lines)?;
    parse_records(table)
}
