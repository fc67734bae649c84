use clap::Parser;

/// This program normalizes disaster-law spreadsheets into one record per U.S. state and territory.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON configuration file. The options passed on the command line
    /// override the values of this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (directory path, default '.') The directory containing the spreadsheets to read.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the normalized table will be written to the given
    /// location. Otherwise it is printed on the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (json or csv, default json) The format of the normalized table.
    #[clap(short, long, value_parser)]
    pub format: Option<String>,

    /// (list of file extensions or not specified) The extensions of the files to read.
    /// By default: xlsx, xls, xlsm, xlsb, ods and csv.
    #[clap(long, value_parser)]
    pub extensions: Option<Vec<String>>,

    /// If passed as an argument, the files are processed in the order given by the file system
    /// instead of the lexicographic order of their names.
    #[clap(long, takes_value = false)]
    pub discovery_order: bool,

    /// (region name or not specified) Only output the jurisdictions of this region.
    #[clap(long, value_parser)]
    pub region: Option<String>,

    /// (category or not specified) Only output the jurisdictions that have data for this category,
    /// for example 'Civil Rights' or 'language_access'.
    #[clap(long, value_parser)]
    pub category: Option<String>,

    /// If passed as an argument, adds the presence flag of each data category to the output.
    #[clap(long, takes_value = false)]
    pub flags: bool,

    /// If passed as an argument, adds the map coordinates of each state to the output.
    #[clap(long, takes_value = false)]
    pub coordinates: bool,

    /// If passed as an argument, prints a coverage summary on the standard error.
    #[clap(long, takes_value = false)]
    pub summary: bool,

    /// (jurisdiction name or postal code) Prints the details of one jurisdiction instead of the table.
    #[clap(short, long, value_parser)]
    pub jurisdiction: Option<String>,

    /// If passed as an argument, lists the spreadsheets with their columns and first rows, and stops.
    #[clap(long, takes_value = false)]
    pub inspect: bool,

    /// (file path) A reference file containing the expected JSON output. If provided, dlaw will
    /// check that the normalized table matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
