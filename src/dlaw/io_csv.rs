// Primitives for reading CSV files.

use log::debug;
use snafu::prelude::*;

use std::path::Path;

use disaster_law::SheetTable;

use crate::dlaw::io_common::{assemble_table, simplify_file_name};
use crate::dlaw::*;

/// Reads a CSV file as a single sheet. Empty cells are missing values.
pub fn read_csv_table(path: &Path) -> DlawResult<SheetTable> {
    let path_s = path.display().to_string();
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(ReadingCsvSnafu {
            path: path_s.clone(),
        })?;
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for (idx, record_r) in rdr.into_records().enumerate() {
        let record = record_r.context(ReadingCsvSnafu {
            path: path_s.clone(),
        })?;
        let row: Vec<Option<String>> = record
            .iter()
            .map(|s| {
                if s.is_empty() {
                    None
                } else {
                    Some(s.to_string())
                }
            })
            .collect();
        debug!("read_csv_table: lineno: {:?} row: {:?}", idx + 1, &row);
        rows.push(row);
    }
    Ok(assemble_table(&simplify_file_name(path), rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_ragged_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Midwest laws.csv");
        fs::write(
            &path,
            "State,Key Statutes / Codes,Mutual Aid\nOhio,\"ORC 5502, 5915\"\nIowa,,EMAC\n",
        )
        .unwrap();
        let t = read_csv_table(&path).unwrap();
        assert_eq!(t.source, "Midwest laws.csv");
        assert_eq!(t.header, vec!["State", "Key Statutes / Codes", "Mutual Aid"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.cell(0, 1), Some("ORC 5502, 5915"));
        assert_eq!(t.cell(0, 2), None);
        assert_eq!(t.cell(1, 1), None);
        assert_eq!(t.cell(1, 2), Some("EMAC"));
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(read_csv_table(&dir.path().join("nope.csv")).is_err());
    }
}
