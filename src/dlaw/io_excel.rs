use calamine::{open_workbook_auto, DataType, Reader};
use log::debug;
use snafu::prelude::*;

use std::path::Path;

use disaster_law::SheetTable;

use crate::dlaw::io_common::{assemble_table, simplify_file_name};
use crate::dlaw::*;

/// Reads the first worksheet of a workbook (xlsx, xls, xlsm, xlsb or ods).
pub fn read_excel_table(path: &Path) -> DlawResult<SheetTable> {
    let path_s = path.display().to_string();
    let mut workbook = open_workbook_auto(path).context(OpeningSpreadsheetSnafu {
        path: path_s.clone(),
    })?;
    let wrange = workbook
        .worksheet_range_at(0)
        .context(EmptySpreadsheetSnafu {
            path: path_s.clone(),
        })?
        .context(OpeningSpreadsheetSnafu { path: path_s })?;

    let rows: Vec<Vec<Option<String>>> = wrange
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    debug!("read_excel_table: {:?}: {} rows", path, rows.len());
    Ok(assemble_table(&simplify_file_name(path), rows))
}

/// The text of a cell. Whole numbers lose their decimal part.
pub fn cell_text(cell: &DataType) -> Option<String> {
    match cell {
        DataType::String(s) => Some(s.clone()),
        DataType::Int(i) => Some(i.to_string()),
        DataType::Float(f) | DataType::DateTime(f) => Some(number_text(*f)),
        DataType::Bool(b) => Some(b.to_string()),
        DataType::Error(e) => {
            debug!("cell_text: error cell {:?}", e);
            None
        }
        DataType::Empty => None,
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

fn number_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn cell_texts() {
        assert_eq!(
            cell_text(&DataType::String("Texas".to_string())),
            Some("Texas".to_string())
        );
        assert_eq!(cell_text(&DataType::Int(2018)), Some("2018".to_string()));
        assert_eq!(cell_text(&DataType::Float(2018.0)), Some("2018".to_string()));
        assert_eq!(cell_text(&DataType::Float(1.5)), Some("1.5".to_string()));
        assert_eq!(cell_text(&DataType::Bool(true)), Some("true".to_string()));
        assert_eq!(cell_text(&DataType::Empty), None);
        assert_eq!(cell_text(&DataType::Error(CellErrorType::NA)), None);
    }

    #[test]
    fn not_a_workbook() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, "not a zip archive").unwrap();
        assert!(read_excel_table(&path).is_err());
    }
}
