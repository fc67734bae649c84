use log::{debug, info, warn};

use disaster_law::builder::Builder;
use disaster_law::jurisdictions::{lookup, lookup_abbreviation};
use disaster_law::projection::*;
use disaster_law::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::Path;

use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::dlaw::config_reader::*;
use crate::dlaw::io_common::{discover_files, read_table, simplify_file_name};
use crate::dlaw::output::*;

pub mod config_reader;
pub mod inspect;
pub mod io_common;
pub mod io_csv;
pub mod io_excel;
pub mod output;

#[derive(Debug, Snafu)]
pub enum DlawError {
    #[snafu(display("Error opening spreadsheet {path}"))]
    OpeningSpreadsheet {
        source: calamine::Error,
        path: String,
    },
    #[snafu(display("Spreadsheet {path} has no worksheet"))]
    EmptySpreadsheet { path: String },
    #[snafu(display("Error reading CSV file {path}"))]
    ReadingCsv { source: csv::Error, path: String },
    #[snafu(display("Error writing CSV output"))]
    WritingCsv { source: csv::Error },
    #[snafu(display("Unsupported file type: {path}"))]
    UnsupportedFile { path: String },
    #[snafu(display("Error listing directory {path}"))]
    ListingDirectory {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening JSON file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error rendering JSON output"))]
    RenderingJson { source: serde_json::Error },
    #[snafu(display("Error writing output file {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Unknown jurisdiction {name:?}"))]
    UnknownJurisdiction { name: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type DlawResult<T> = Result<T, DlawError>;

/// Reads all the spreadsheets of the input directory into a dataset.
///
/// Files that cannot be read are reported and skipped. If no file could be
/// read, the dataset holds placeholder records and is flagged with `no_data`.
pub fn load_dataset(settings: &Settings) -> DlawResult<NormalizedDataset> {
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

    let mut builder = Builder::new();
    for path in files.iter() {
        info!("Attempting to read file {:?}", path);
        match read_table(path) {
            Ok(table) => {
                if builder.add_table(&table).is_none() {
                    debug!("{:?} has no jurisdiction column", path);
                }
            }
            Err(e) => {
                warn!("Error processing file {}: {}", simplify_file_name(path), e);
            }
        }
    }
    Ok(builder.finish())
}

/// Finds a jurisdiction by its name or its postal code.
fn find_record<'a>(
    dataset: &'a NormalizedDataset,
    name: &str,
) -> DlawResult<&'a JurisdictionRecord> {
    let n = name.trim();
    let canonical = lookup(n)
        .or_else(|| lookup_abbreviation(n))
        .map(|j| j.name)
        .context(UnknownJurisdictionSnafu { name: n })?;
    dataset
        .get(canonical)
        .context(UnknownJurisdictionSnafu { name: n })
}

fn write_output(rendered: &str, out: &Option<String>) -> DlawResult<()> {
    match out {
        Some(path) => {
            info!("Writing output to {:?}", path);
            fs::write(path, rendered).context(WritingOutputSnafu { path: path.clone() })
        }
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

fn read_reference(path: &str) -> DlawResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(js)
}

/// Compares the output rows with a reference file.
///
/// Both sides go through the same JSON value representation, so that the key
/// order of the reference file does not matter.
fn check_reference(reference_path: &str, rows: &[OutputRow]) -> DlawResult<()> {
    let reference = read_reference(reference_path)?;
    let pretty_reference = serde_json::to_string_pretty(&reference).context(RenderingJsonSnafu {})?;
    let computed = serde_json::to_value(rows).context(RenderingJsonSnafu {})?;
    let pretty_computed = serde_json::to_string_pretty(&computed).context(RenderingJsonSnafu {})?;
    if pretty_reference != pretty_computed {
        warn!("Found differences with the reference {:?}", reference_path);
        print_diff(
            pretty_reference.as_str(),
            pretty_computed.as_str(),
            "\n",
        );
        whatever!("Difference detected between the normalized table and the reference");
    }
    info!("Output matches the reference {:?}", reference_path);
    Ok(())
}

/// Runs the program with the given command line.
pub fn run(args: &Args) -> DlawResult<()> {
    let config = match &args.config {
        Some(path) => Some(read_config(path)?),
        None => None,
    };
    let settings = resolve_settings(args, config.as_ref())?;
    debug!("settings: {:?}", settings);

    if args.inspect {
        return inspect::run_inspection(&settings);
    }

    let dataset = load_dataset(&settings)?;
    if dataset.no_data {
        warn!("No data in {:?}", settings.input_directory);
        eprintln!(
            "No data: no readable spreadsheet in {}. All the jurisdictions are empty.",
            settings.input_directory.display()
        );
    }

    if let Some(name) = &args.jurisdiction {
        let record = find_record(&dataset, name)?;
        println!(
            "{}",
            render_details(record, dataset.mention_count(&record.name))
        );
        return Ok(());
    }

    let records = filter_records(&dataset.records, settings.region, settings.category);
    info!(
        "{} of {} jurisdictions selected",
        records.len(),
        dataset.records.len()
    );
    if args.summary {
        eprintln!("{}", render_summary(&summarize(&records)));
    }

    let options = settings.output_options();
    let rows = build_rows(&records, &options);
    let rendered = match settings.output_format {
        OutputFormat::Json => render_json(&rows)?,
        OutputFormat::Csv => render_csv(&rows, &options)?,
    };
    write_output(&rendered, &settings.output_path)?;

    if let Some(reference_path) = &args.reference {
        check_reference(reference_path, &rows)?;
    }
    Ok(())
}

/// The directory of a configuration file, against which its relative paths
/// are resolved.
pub fn config_root(config_path: &str) -> Option<&Path> {
    Path::new(config_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn args_for(dir: &TempDir) -> Args {
        Args {
            input: Some(dir.path().display().to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn loads_a_directory_of_csv_files() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "b_Southwest.csv",
            "State,Key Statutes / Codes\nTexas,Water Code 16\n",
        );
        write(
            &dir,
            "a_laws.csv",
            "State,Key Statutes / Codes,Mutual Aid\n\
             Texas,Gov't Code 418,EMAC\n\
             \"California, Texas, etc.\",,Compact\n",
        );
        write(&dir, "notes.txt", "State\nOhio\n");
        write(&dir, "topics.csv", "Topic,Notes\nFloods,x\n");

        let settings = resolve_settings(&args_for(&dir), None).unwrap();
        let ds = load_dataset(&settings).unwrap();
        assert_eq!(ds.records.len(), 56);
        assert_eq!(ds.tables_read, 3);
        assert_eq!(ds.tables_used, 2);

        let texas = ds.get("Texas").unwrap();
        // b_Southwest.csv sorts after a_laws.csv
        assert_eq!(texas.field(SemanticField::KeyStatutes), "Water Code 16");
        assert_eq!(texas.field(SemanticField::MutualAid), "Compact");
        assert_eq!(texas.region, Region::Southwest);
        assert_eq!(ds.mention_count("Texas"), 3);

        let california = ds.get("California").unwrap();
        assert_eq!(california.field(SemanticField::MutualAid), "Compact");
        assert_eq!(california.region, Region::WestCoast);
    }

    #[test]
    fn unreadable_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "broken.xlsx", "this is not a workbook");
        write(&dir, "ok.csv", "Jurisdiction,Equity\nGuam,Equity plan\n");
        let settings = resolve_settings(&args_for(&dir), None).unwrap();
        let ds = load_dataset(&settings).unwrap();
        assert_eq!(ds.tables_read, 1);
        assert_eq!(
            ds.get("Guam").unwrap().field(SemanticField::EquityInitiatives),
            "Equity plan"
        );
    }

    #[test]
    fn no_readable_file_is_no_data() {
        let dir = TempDir::new().unwrap();
        write(&dir, "broken.xlsx", "this is not a workbook");
        let settings = resolve_settings(&args_for(&dir), None).unwrap();
        let ds = load_dataset(&settings).unwrap();
        assert!(ds.no_data);
        assert_eq!(ds.records.len(), 56);
        assert!(ds.records.iter().all(|r| !r.has_any_data()));
    }

    #[test]
    fn run_writes_placeholders_without_data() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.json");
        let args = Args {
            out: Some(out.display().to_string()),
            ..args_for(&dir)
        };
        run(&args).unwrap();
        let js: JSValue = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let rows = js.as_array().unwrap();
        assert_eq!(rows.len(), 56);
        assert_eq!(rows[0]["name"], "Alabama");
        assert_eq!(rows[0]["data_availability"], 0.0);
    }

    #[test]
    fn run_writes_the_filtered_table() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "laws.csv",
            "State,Civil Rights\nOhio,Title VI\nIowa,\nTexas,ADA\n",
        );
        let out = dir.path().join("out.csv");
        let args = Args {
            out: Some(out.display().to_string()),
            format: Some("csv".to_string()),
            region: Some("midwest".to_string()),
            category: Some("Civil Rights".to_string()),
            ..args_for(&dir)
        };
        run(&args).unwrap();
        let content = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("name,abbreviation,region,key_statutes"));
        assert!(lines[1].starts_with("Ohio,OH,Midwest,"));
    }

    #[test]
    fn run_checks_the_reference() {
        let dir = TempDir::new().unwrap();
        write(&dir, "laws.csv", "State,Mutual Aid\nUtah,EMAC\n");
        let out = dir.path().join("out.json");
        let args = Args {
            out: Some(out.display().to_string()),
            region: Some("Mountain West".to_string()),
            ..args_for(&dir)
        };
        run(&args).unwrap();

        // The output is its own reference.
        let with_reference = Args {
            reference: Some(out.display().to_string()),
            out: Some(dir.path().join("out2.json").display().to_string()),
            ..args.clone()
        };
        run(&with_reference).unwrap();

        let bad_reference = dir.path().join("bad.json");
        fs::write(&bad_reference, "[]").unwrap();
        let mismatch = Args {
            reference: Some(bad_reference.display().to_string()),
            ..with_reference
        };
        assert!(run(&mismatch).is_err());
    }

    #[test]
    fn details_by_code_or_name() {
        let dir = TempDir::new().unwrap();
        write(&dir, "laws.csv", "State,Mutual Aid\nUtah,EMAC\n");
        let settings = resolve_settings(&args_for(&dir), None).unwrap();
        let ds = load_dataset(&settings).unwrap();
        assert_eq!(find_record(&ds, "ut").unwrap().name, "Utah");
        assert_eq!(find_record(&ds, "Utah").unwrap().name, "Utah");
        assert!(find_record(&ds, "Deseret").is_err());
    }

    #[test]
    fn config_root_of_bare_file_name() {
        assert_eq!(config_root("dlaw.json"), None);
        assert_eq!(config_root("conf/dlaw.json"), Some(Path::new("conf")));
    }
}
