/*!
Normalization of U.S. disaster-law spreadsheets.

Source spreadsheets describe statutes and programs by state or territory, with
freely named columns and cells that may list several jurisdictions at once.
This crate reduces any number of them into one [JurisdictionRecord] for each
of the 56 tracked jurisdictions.

```
use disaster_law::*;

let table = SheetTable {
    source: "CA-WA-OR_West.xlsx".to_string(),
    header: vec!["State".to_string(), "Key Statutes / Codes".to_string()],
    rows: vec![vec![Some("Oregon".to_string()), Some("ORS 401".to_string())]],
};
let dataset = run_normalization(&[table]);
let oregon = dataset.get("Oregon").unwrap();
assert_eq!(oregon.region, Region::WestCoast);
assert_eq!(oregon.field(SemanticField::KeyStatutes), "ORS 401");
assert_eq!(dataset.records.len(), 56);
assert!(!dataset.no_data);
```

See the [manual] for the conventions expected from the input files.
*/

mod config;
use log::{debug, info};

pub mod builder;
pub mod jurisdictions;
pub mod manual;
pub mod projection;

pub use crate::config::*;

use crate::builder::Builder;
use crate::jurisdictions::canonical_name;

// ********* Jurisdiction column *********

const JURISDICTION_HEADER_KEYWORDS: [&str; 3] = ["state", "territory", "jurisdiction"];

/// Finds the column that names the jurisdictions: the first header that
/// mentions a state, a territory or a jurisdiction.
pub fn find_jurisdiction_column(header: &[String]) -> Option<usize> {
    header.iter().position(|h| {
        let hl = h.to_lowercase();
        JURISDICTION_HEADER_KEYWORDS.iter().any(|k| hl.contains(k))
    })
}

// ********* Jurisdiction names **********

// Fragments that only appear in prose, links and references. A cell containing
// one of them describes something and does not list jurisdictions.
const NON_JURISDICTION_INDICATORS: [&str; 15] = [
    "http",
    "www",
    ".pdf",
    ".gov",
    ".com",
    "often ",
    "varies",
    "not highlighted",
    "coordination",
    "highest in",
    "large at-risk",
    "patchwork",
    "major losses",
    "many states",
    "some states",
];

// Placeholders found in lists of states.
const LIST_FILLERS: [&str; 2] = ["etc.", "Others"];

/// Extracts the jurisdictions named in a cell.
///
/// The parser only accepts exact names. Anything ambiguous yields no
/// jurisdiction:
/// * empty cells and "nan" give nothing
/// * descriptive text (links, hedging words) gives nothing
/// * comma-separated lists keep their exactly spelled names
/// * otherwise, the whole cell must be one name
///
/// ```
/// use disaster_law::parse_jurisdiction_names;
///
/// assert_eq!(
///     parse_jurisdiction_names(Some("California, Texas, etc.")),
///     vec!["California", "Texas"]
/// );
/// assert!(parse_jurisdiction_names(Some("Many states have adopted EMAC")).is_empty());
/// ```
pub fn parse_jurisdiction_names(cell: Option<&str>) -> Vec<&'static str> {
    let text = match cell.map(|s| s.trim()) {
        Some(s) if !s.is_empty() && s != "nan" => s,
        _ => return vec![],
    };

    let lower = text.to_lowercase();
    if NON_JURISDICTION_INDICATORS
        .iter()
        .any(|ind| lower.contains(ind))
    {
        debug!("parse_jurisdiction_names: descriptive text: {:?}", text);
        return vec![];
    }

    if text.contains(',') {
        let mut res: Vec<&'static str> = Vec::new();
        for part in text.split(',').map(|p| p.trim()) {
            match canonical_name(part) {
                Some(name) => res.push(name),
                None if LIST_FILLERS.contains(&part) => {}
                None => {
                    debug!("parse_jurisdiction_names: dropping {:?} in {:?}", part, text);
                }
            }
        }
        res
    } else {
        canonical_name(text).into_iter().collect()
    }
}

// ********* Column classification *********

enum HeaderMatch {
    // At least one of the fragments
    AnyOf(&'static [&'static str]),
    // All the fragments
    AllOf(&'static [&'static str]),
}

impl HeaderMatch {
    fn matches(&self, lower_header: &str) -> bool {
        match self {
            HeaderMatch::AnyOf(frags) => frags.iter().any(|f| lower_header.contains(f)),
            HeaderMatch::AllOf(frags) => frags.iter().all(|f| lower_header.contains(f)),
        }
    }
}

// Evaluated top to bottom, the first match wins.
const COLUMN_RULES: [(HeaderMatch, SemanticField); 11] = [
    (
        HeaderMatch::AnyOf(&["statute", "code"]),
        SemanticField::KeyStatutes,
    ),
    (
        HeaderMatch::AnyOf(&["local authority"]),
        SemanticField::LocalAuthority,
    ),
    (
        HeaderMatch::AnyOf(&["notable provision"]),
        SemanticField::NotableProvisions,
    ),
    (
        HeaderMatch::AllOf(&["vulnerable", "protection"]),
        SemanticField::VulnerableProtections,
    ),
    (
        HeaderMatch::AnyOf(&["civil rights", "discrimination"]),
        SemanticField::CivilRights,
    ),
    (
        HeaderMatch::AnyOf(&["disability", "functional"]),
        SemanticField::DisabilityNeeds,
    ),
    (
        HeaderMatch::AnyOf(&["language access"]),
        SemanticField::LanguageAccess,
    ),
    (
        HeaderMatch::AnyOf(&["equity"]),
        SemanticField::EquityInitiatives,
    ),
    (
        HeaderMatch::AnyOf(&["emergency declaration"]),
        SemanticField::EmergencyDeclaration,
    ),
    (
        HeaderMatch::AnyOf(&["mitigation"]),
        SemanticField::MitigationPlanning,
    ),
    (
        HeaderMatch::AnyOf(&["mutual aid"]),
        SemanticField::MutualAid,
    ),
];

/// Maps a column header to the semantic field it carries, if any.
pub fn classify_column(header: &str) -> Option<SemanticField> {
    let hl = header.to_lowercase();
    COLUMN_RULES
        .iter()
        .find(|(m, _)| m.matches(&hl))
        .map(|(_, f)| *f)
}

// ********* Regions *********

const SOUTHEAST_FILE_STATES: [&str; 9] = [
    "Alabama",
    "Florida",
    "Georgia",
    "Louisiana",
    "Mississippi",
    "North Carolina",
    "South Carolina",
    "Tennessee",
    "Arkansas",
];

const MID_ATLANTIC_FILE_STATES: [&str; 3] = ["Maryland", "Virginia", "Delaware"];

/// The region implied by the naming convention of a source file, for a
/// jurisdiction found in this file.
///
/// The rules are checked in order and the first one that applies decides. Files
/// covering the South and the Mid-Atlantic together only assign a region to the
/// states they are known to cover.
pub fn region_from_file_name(file_name: &str, jurisdiction: &str) -> Option<Region> {
    if file_name.starts_with("CA-WA-OR") {
        Some(Region::WestCoast)
    } else if file_name.contains("Southwest") || file_name.starts_with("SW-") {
        Some(Region::Southwest)
    } else if file_name.contains("Midwest") {
        Some(Region::Midwest)
    } else if file_name.contains("Northeast") {
        Some(Region::Northeast)
    } else if file_name.contains("Appalachia") {
        Some(Region::Appalachia)
    } else if file_name.contains("MTN") {
        Some(Region::MountainWest)
    } else if file_name.contains("AK-HI") {
        Some(Region::AlaskaHawaii)
    } else if file_name.contains("South") || file_name.contains("Mid-Atlantic") {
        if SOUTHEAST_FILE_STATES.contains(&jurisdiction) {
            Some(Region::Southeast)
        } else if MID_ATLANTIC_FILE_STATES.contains(&jurisdiction) {
            Some(Region::MidAtlantic)
        } else {
            None
        }
    } else {
        None
    }
}

// ********* Pipeline *********

/// Runs the normalization over the given tables, in the given order.
///
/// When several tables provide a value for the same field of the same
/// jurisdiction, the last one wins: callers control the outcome through the
/// order of `tables`.
///
/// The dataset always contains the 56 jurisdictions, whatever the content of
/// the tables. When `tables` is empty, the records are placeholders and
/// [NormalizedDataset::no_data] is set.
pub fn run_normalization(tables: &[SheetTable]) -> NormalizedDataset {
    info!("run_normalization: processing {} tables", tables.len());
    let mut builder = Builder::new();
    for table in tables.iter() {
        builder.add_table(table);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn parse_lists_with_fillers() {
        init();
        assert_eq!(
            parse_jurisdiction_names(Some("California, Texas, etc.")),
            vec!["California", "Texas"]
        );
        assert_eq!(
            parse_jurisdiction_names(Some("Guam, Others, Atlantis , Puerto Rico")),
            vec!["Guam", "Puerto Rico"]
        );
    }

    #[test]
    fn parse_descriptive_text() {
        assert!(parse_jurisdiction_names(Some("Many states have adopted...")).is_empty());
        assert!(parse_jurisdiction_names(Some("Texas, see https://gov.texas.gov")).is_empty());
        assert!(parse_jurisdiction_names(Some("Varies by county")).is_empty());
        assert!(parse_jurisdiction_names(Some("A patchwork of Ohio rules")).is_empty());
    }

    #[test]
    fn parse_empty_cells() {
        assert!(parse_jurisdiction_names(None).is_empty());
        assert!(parse_jurisdiction_names(Some("")).is_empty());
        assert!(parse_jurisdiction_names(Some("nan")).is_empty());
        assert!(parse_jurisdiction_names(Some("   ")).is_empty());
    }

    #[test]
    fn parse_single_names() {
        assert_eq!(parse_jurisdiction_names(Some(" Oregon ")), vec!["Oregon"]);
        assert_eq!(
            parse_jurisdiction_names(Some("U.S. Virgin Islands")),
            vec!["U.S. Virgin Islands"]
        );
        // No guessing on case or partial names.
        assert!(parse_jurisdiction_names(Some("oregon")).is_empty());
        assert!(parse_jurisdiction_names(Some("Oregon State")).is_empty());
    }

    #[test]
    fn jurisdiction_column_detection() {
        let h = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<String>>();
        assert_eq!(
            find_jurisdiction_column(&h(&["Topic", "State/Territory", "Statute"])),
            Some(1)
        );
        assert_eq!(find_jurisdiction_column(&h(&["JURISDICTION"])), Some(0));
        assert_eq!(find_jurisdiction_column(&h(&["Topic", "Notes"])), None);
    }

    #[test]
    fn column_rules_first_match_wins() {
        assert_eq!(
            classify_column("Key Statutes / Codes"),
            Some(SemanticField::KeyStatutes)
        );
        assert_eq!(
            classify_column("Local Authority"),
            Some(SemanticField::LocalAuthority)
        );
        assert_eq!(
            classify_column("Vulnerable Populations Protections"),
            Some(SemanticField::VulnerableProtections)
        );
        assert_eq!(classify_column("Vulnerable Populations"), None);
        assert_eq!(
            classify_column("Anti-Discrimination"),
            Some(SemanticField::CivilRights)
        );
        assert_eq!(
            classify_column("Access & Functional Needs"),
            Some(SemanticField::DisabilityNeeds)
        );
        assert_eq!(
            classify_column("Equity Initiatives"),
            Some(SemanticField::EquityInitiatives)
        );
        assert_eq!(
            classify_column("Emergency Declaration Powers"),
            Some(SemanticField::EmergencyDeclaration)
        );
        assert_eq!(
            classify_column("Hazard Mitigation Plan"),
            Some(SemanticField::MitigationPlanning)
        );
        assert_eq!(classify_column("Mutual Aid"), Some(SemanticField::MutualAid));
        // "code" comes first, before the mitigation rule.
        assert_eq!(
            classify_column("Mitigation code"),
            Some(SemanticField::KeyStatutes)
        );
        assert_eq!(classify_column("Notes"), None);
    }

    #[test]
    fn regions_from_file_names() {
        assert_eq!(
            region_from_file_name("CA-WA-OR_West.xlsx", "Oregon"),
            Some(Region::WestCoast)
        );
        assert_eq!(
            region_from_file_name("SW-laws.xlsx", "Texas"),
            Some(Region::Southwest)
        );
        assert_eq!(
            region_from_file_name("Southwest.xlsx", "Texas"),
            Some(Region::Southwest)
        );
        assert_eq!(
            region_from_file_name("MTN_states.xlsx", "Utah"),
            Some(Region::MountainWest)
        );
        assert_eq!(
            region_from_file_name("AK-HI.xlsx", "Hawaii"),
            Some(Region::AlaskaHawaii)
        );
        assert_eq!(
            region_from_file_name("South_Mid-Atlantic.xlsx", "Virginia"),
            Some(Region::MidAtlantic)
        );
        assert_eq!(
            region_from_file_name("South_Mid-Atlantic.xlsx", "Tennessee"),
            Some(Region::Southeast)
        );
        assert_eq!(region_from_file_name("South_Mid-Atlantic.xlsx", "Ohio"), None);
        assert_eq!(region_from_file_name("laws.xlsx", "Ohio"), None);
        // Matching is case sensitive.
        assert_eq!(region_from_file_name("midwest.xlsx", "Ohio"), None);
    }

    #[test]
    fn no_tables_is_no_data() {
        init();
        let ds = run_normalization(&[]);
        assert!(ds.no_data);
        assert_eq!(ds.records.len(), 56);
        assert_eq!(ds.tables_read, 0);
        assert!(ds.mentions.is_empty());
        let guam = ds.get("Guam").unwrap();
        assert_eq!(guam.region, Region::Territories);
        assert!(!guam.has_any_data());
    }
}
