use log::debug;
use snafu::prelude::*;

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use disaster_law::projection::Category;
use disaster_law::Region;

use crate::args::Args;
use crate::dlaw::output::OutputOptions;
use crate::dlaw::*;

pub const DEFAULT_EXTENSIONS: [&str; 6] = ["xlsx", "xls", "xlsm", "xlsb", "ods", "csv"];

/// The content of a configuration file. All the entries are optional.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DlawConfig {
    #[serde(rename = "inputDirectory")]
    pub input_directory: Option<String>,
    pub extensions: Option<Vec<String>>,
    #[serde(rename = "fileOrder")]
    pub file_order: Option<String>,
    #[serde(rename = "outputFormat")]
    pub output_format: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
    #[serde(rename = "includeCategoryFlags")]
    pub include_category_flags: Option<bool>,
    #[serde(rename = "includeCoordinates")]
    pub include_coordinates: Option<bool>,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum FileOrder {
    /// Sorted by file name.
    Lexicographic,
    /// As listed by the file system.
    Discovery,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// The options of a run, after merging the command line, the configuration
/// file and the defaults.
#[derive(PartialEq, Debug, Clone)]
pub struct Settings {
    pub input_directory: PathBuf,
    /// Lowercase, without the leading dot.
    pub extensions: Vec<String>,
    pub file_order: FileOrder,
    pub output_format: OutputFormat,
    /// None for the standard output.
    pub output_path: Option<String>,
    pub include_category_flags: bool,
    pub include_coordinates: bool,
    pub region: Option<Region>,
    pub category: Option<Category>,
}

impl Settings {
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            include_category_flags: self.include_category_flags,
            include_coordinates: self.include_coordinates,
        }
    }
}

pub fn read_config(path: &str) -> DlawResult<DlawConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: DlawConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    debug!("read_config: {:?}: {:?}", path, config);
    Ok(config)
}

fn parse_file_order(s: &str) -> DlawResult<FileOrder> {
    match s.to_lowercase().as_str() {
        "lexicographic" => Ok(FileOrder::Lexicographic),
        "discovery" => Ok(FileOrder::Discovery),
        x => whatever!("Unknown file order {:?}: expected lexicographic or discovery", x),
    }
}

fn parse_output_format(s: &str) -> DlawResult<OutputFormat> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "csv" => Ok(OutputFormat::Csv),
        x => whatever!("Unknown output format {:?}: expected json or csv", x),
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

/// Merges the command line with the configuration file. The command line wins.
pub fn resolve_settings(args: &Args, config: Option<&DlawConfig>) -> DlawResult<Settings> {
    let default_config = DlawConfig::default();
    let config = config.unwrap_or(&default_config);

    // A relative input directory of the configuration file is relative to the file.
    let input_directory: PathBuf = match (&args.input, &config.input_directory) {
        (Some(dir), _) => PathBuf::from(dir),
        (None, Some(dir)) => match args.config.as_deref().and_then(config_root) {
            Some(root) if PathBuf::from(dir).is_relative() => root.join(dir),
            _ => PathBuf::from(dir),
        },
        (None, None) => PathBuf::from("."),
    };

    let extensions: Vec<String> = match args.extensions.as_ref().or(config.extensions.as_ref()) {
        Some(exts) if !exts.is_empty() => exts.iter().map(|e| normalize_extension(e)).collect(),
        _ => DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
    };

    let file_order = if args.discovery_order {
        FileOrder::Discovery
    } else {
        match &config.file_order {
            Some(s) => parse_file_order(s)?,
            None => FileOrder::Lexicographic,
        }
    };

    let output_format = match args.format.as_ref().or(config.output_format.as_ref()) {
        Some(s) => parse_output_format(s)?,
        None => OutputFormat::Json,
    };

    let output_path = match args.out.as_ref().or(config.output_path.as_ref()) {
        Some(p) if p.is_empty() || p == "stdout" => None,
        Some(p) => Some(p.clone()),
        None => None,
    };

    let region = match &args.region {
        Some(s) if s == "All" => None,
        Some(s) => match Region::from_label(s) {
            Some(r) => Some(r),
            None => whatever!("Unknown region {:?}", s),
        },
        None => None,
    };

    let category = match &args.category {
        Some(s) if s == "All" => None,
        Some(s) => match Category::parse(s) {
            Some(c) => Some(c),
            None => whatever!("Unknown data category {:?}", s),
        },
        None => None,
    };

    Ok(Settings {
        input_directory,
        extensions,
        file_order,
        output_format,
        output_path,
        include_category_flags: args.flags || config.include_category_flags.unwrap_or(false),
        include_coordinates: args.coordinates || config.include_coordinates.unwrap_or(false),
        region,
        category,
    })
}
