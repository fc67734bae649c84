use log::debug;
use snafu::prelude::*;

use std::fs;
use std::path::{Path, PathBuf};

use disaster_law::SheetTable;

use crate::dlaw::config_reader::FileOrder;
use crate::dlaw::io_csv::read_csv_table;
use crate::dlaw::io_excel::read_excel_table;
use crate::dlaw::*;

const EXCEL_EXTENSIONS: [&str; 5] = ["xlsx", "xls", "xlsm", "xlsb", "ods"];

pub fn simplify_file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_lowercase())
}

/// Lists the files of a directory that have one of the given extensions.
///
/// Office lock files (`~$name.xlsx`) and subdirectories are skipped.
pub fn discover_files(
    dir: &Path,
    extensions: &[String],
    order: FileOrder,
) -> DlawResult<Vec<PathBuf>> {
    let path_s = dir.display().to_string();
    let entries = fs::read_dir(dir).context(ListingDirectorySnafu {
        path: path_s.clone(),
    })?;
    let mut files: Vec<PathBuf> = Vec::new();
    for entry_r in entries {
        let entry = entry_r.context(ListingDirectorySnafu {
            path: path_s.clone(),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if simplify_file_name(&path).starts_with("~$") {
            debug!("discover_files: skipping lock file {:?}", path);
            continue;
        }
        match extension_of(&path) {
            Some(ext) if extensions.contains(&ext) => files.push(path),
            _ => debug!("discover_files: skipping {:?}", path),
        }
    }
    if order == FileOrder::Lexicographic {
        files.sort_by_key(|p| simplify_file_name(p));
    }
    Ok(files)
}

/// Reads the first sheet of a spreadsheet file.
pub fn read_table(path: &Path) -> DlawResult<SheetTable> {
    let path_s = path.display().to_string();
    match extension_of(path) {
        Some(ext) if ext == "csv" => read_csv_table(path),
        Some(ext) if EXCEL_EXTENSIONS.contains(&ext.as_str()) => read_excel_table(path),
        _ => UnsupportedFileSnafu { path: path_s }.fail(),
    }
}

/// Builds a table from raw rows. The first row holds the column names.
pub fn assemble_table(source: &str, rows: Vec<Vec<Option<String>>>) -> SheetTable {
    let mut iter = rows.into_iter();
    let header: Vec<String> = iter
        .next()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = cell.unwrap_or_default();
            if idx == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name
            }
        })
        .collect();
    let rows: Vec<Vec<Option<String>>> = iter.collect();
    debug!(
        "assemble_table: {}: {} columns, {} rows",
        source,
        header.len(),
        rows.len()
    );
    SheetTable {
        source: source.to_string(),
        header,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn file_names() {
        assert_eq!(
            simplify_file_name(Path::new("/data/CA-WA-OR laws.xlsx")),
            "CA-WA-OR laws.xlsx"
        );
        assert_eq!(simplify_file_name(Path::new("South.csv")), "South.csv");
    }

    #[test]
    fn discovery_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["b.CSV", "a.xlsx", "~$a.xlsx", "c.txt", "d.csv"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("e.csv")).unwrap();
        let exts: Vec<String> = vec!["csv".to_string(), "xlsx".to_string()];
        let files = discover_files(dir.path(), &exts, FileOrder::Lexicographic).unwrap();
        let names: Vec<String> = files.iter().map(|p| simplify_file_name(p)).collect();
        assert_eq!(names, vec!["a.xlsx", "b.CSV", "d.csv"]);

        let unsorted = discover_files(dir.path(), &exts, FileOrder::Discovery).unwrap();
        assert_eq!(unsorted.len(), 3);
    }

    #[test]
    fn missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(discover_files(&missing, &["csv".to_string()], FileOrder::Lexicographic).is_err());
    }

    #[test]
    fn unsupported_extension() {
        assert!(read_table(Path::new("notes.txt")).is_err());
    }

    #[test]
    fn assemble_header_and_rows() {
        let t = assemble_table(
            "f.csv",
            vec![
                vec![some("\u{feff}State"), None, some("Mutual Aid")],
                vec![some("Ohio"), None, some("EMAC")],
            ],
        );
        assert_eq!(t.source, "f.csv");
        assert_eq!(t.header, vec!["State", "", "Mutual Aid"]);
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.cell(0, 2), Some("EMAC"));
        assert_eq!(t.cell(0, 1), None);

        let empty = assemble_table("e.csv", vec![]);
        assert!(empty.header.is_empty());
        assert!(empty.rows.is_empty());
    }
}
