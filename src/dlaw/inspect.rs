// Listing of the input spreadsheets, to help writing new ones.

use log::info;
use std::fmt::Write as _;

use disaster_law::SheetTable;

use crate::dlaw::config_reader::Settings;
use crate::dlaw::io_common::{discover_files, read_table, simplify_file_name};
use crate::dlaw::*;

const PREVIEW_ROWS: usize = 5;

/// Prints the files of the input directory with their columns and first rows.
pub fn run_inspection(settings: &Settings) -> DlawResult<()> {
    let files = discover_files(
        &settings.input_directory,
        &settings.extensions,
        settings.file_order,
    )?;
    info!(
        "Found {} spreadsheet files in {:?}",
        files.len(),
        settings.input_directory
    );
    println!("Files:");
    for path in files.iter() {
        println!("  {}", simplify_file_name(path));
    }
    for path in files.iter() {
        println!();
        match read_table(path) {
            Ok(table) => println!("{}", describe_table(&table, PREVIEW_ROWS)),
            Err(e) => println!("=== {} ===\nError: {}", simplify_file_name(path), e),
        }
    }
    Ok(())
}

pub fn describe_table(table: &SheetTable, max_rows: usize) -> String {
    let mut out = String::new();
    _ = writeln!(out, "=== {} ===", table.source);
    _ = writeln!(out, "Columns: {}", table.header.join(" | "));
    _ = writeln!(
        out,
        "Dimension: {} rows x {} columns",
        table.rows.len(),
        table.header.len()
    );
    for row in table.rows.iter().take(max_rows) {
        let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("")).collect();
        _ = writeln!(out, "  {}", cells.join(" | "));
    }
    if table.rows.len() > max_rows {
        _ = writeln!(out, "  ... {} more rows", table.rows.len() - max_rows);
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_the_first_rows() {
        let rows: Vec<Vec<Option<String>>> = (0..7)
            .map(|i| vec![Some(format!("row{}", i)), None])
            .collect();
        let table = SheetTable {
            source: "Midwest.xlsx".to_string(),
            header: vec!["State".to_string(), "Mutual Aid".to_string()],
            rows,
        };
        let s = describe_table(&table, 5);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0], "=== Midwest.xlsx ===");
        assert_eq!(lines[1], "Columns: State | Mutual Aid");
        assert_eq!(lines[2], "Dimension: 7 rows x 2 columns");
        assert_eq!(lines[3], "  row0 | ");
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[8], "  ... 2 more rows");
    }
}
