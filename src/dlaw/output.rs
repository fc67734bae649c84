// Rendering of the normalized table.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;
use snafu::prelude::*;

use disaster_law::jurisdictions::lookup;
use disaster_law::projection::*;
use disaster_law::*;

use crate::dlaw::*;

#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub include_category_flags: bool,
    pub include_coordinates: bool,
}

/// One row of the output table.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct OutputRow {
    pub name: String,
    pub abbreviation: String,
    pub region: String,
    pub key_statutes: String,
    pub local_authority: String,
    pub notable_provisions: String,
    pub vulnerable_protections: String,
    pub civil_rights: String,
    pub disability_needs: String,
    pub language_access: String,
    pub equity_initiatives: String,
    pub emergency_declaration: String,
    pub mitigation_planning: String,
    pub mutual_aid: String,
    pub data_availability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_flags: Option<BTreeMap<&'static str, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_value: Option<f64>,
}

impl OutputRow {
    fn field_values(&self) -> [&str; SemanticField::COUNT] {
        [
            &self.key_statutes,
            &self.local_authority,
            &self.notable_provisions,
            &self.vulnerable_protections,
            &self.civil_rights,
            &self.disability_needs,
            &self.language_access,
            &self.equity_initiatives,
            &self.emergency_declaration,
            &self.mitigation_planning,
            &self.mutual_aid,
        ]
    }
}

fn build_row(record: &JurisdictionRecord, options: &OutputOptions) -> OutputRow {
    let text = |f: SemanticField| record.field(f).to_string();
    let category_flags = if options.include_category_flags {
        Some(
            category_flags(record)
                .into_iter()
                .map(|(c, b)| (c.key(), b))
                .collect(),
        )
    } else {
        None
    };
    let (latitude, longitude, map_value) = if options.include_coordinates {
        let centroid = lookup(&record.name).and_then(|j| j.centroid);
        (
            centroid.map(|(lat, _)| lat),
            centroid.map(|(_, lon)| lon),
            Some(color_value(record)),
        )
    } else {
        (None, None, None)
    };
    OutputRow {
        name: record.name.clone(),
        abbreviation: record.abbreviation.clone(),
        region: record.region.label().to_string(),
        key_statutes: text(SemanticField::KeyStatutes),
        local_authority: text(SemanticField::LocalAuthority),
        notable_provisions: text(SemanticField::NotableProvisions),
        vulnerable_protections: text(SemanticField::VulnerableProtections),
        civil_rights: text(SemanticField::CivilRights),
        disability_needs: text(SemanticField::DisabilityNeeds),
        language_access: text(SemanticField::LanguageAccess),
        equity_initiatives: text(SemanticField::EquityInitiatives),
        emergency_declaration: text(SemanticField::EmergencyDeclaration),
        mitigation_planning: text(SemanticField::MitigationPlanning),
        mutual_aid: text(SemanticField::MutualAid),
        data_availability: record.data_availability(),
        category_flags,
        latitude,
        longitude,
        map_value,
    }
}

pub fn build_rows(records: &[&JurisdictionRecord], options: &OutputOptions) -> Vec<OutputRow> {
    records.iter().map(|r| build_row(r, options)).collect()
}

pub fn render_json(rows: &[OutputRow]) -> DlawResult<String> {
    serde_json::to_string_pretty(rows).context(RenderingJsonSnafu {})
}

fn optional_number(x: Option<f64>) -> String {
    x.map(|v| v.to_string()).unwrap_or_default()
}

/// Renders the rows as CSV. The optional columns are present only when the
/// options requested them.
pub fn render_csv(rows: &[OutputRow], options: &OutputOptions) -> DlawResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header: Vec<&str> = vec!["name", "abbreviation", "region"];
    header.extend(SemanticField::ALL.iter().map(|f| f.key()));
    header.push("data_availability");
    if options.include_category_flags {
        header.extend(Category::ALL.iter().map(|c| c.key()));
    }
    if options.include_coordinates {
        header.extend(["latitude", "longitude", "map_value"]);
    }
    wtr.write_record(&header).context(WritingCsvSnafu {})?;

    for row in rows.iter() {
        let mut record: Vec<String> = vec![
            row.name.clone(),
            row.abbreviation.clone(),
            row.region.clone(),
        ];
        record.extend(row.field_values().iter().map(|s| s.to_string()));
        record.push(row.data_availability.to_string());
        if options.include_category_flags {
            for c in Category::ALL.iter() {
                let flag = row
                    .category_flags
                    .as_ref()
                    .and_then(|m| m.get(c.key()))
                    .cloned()
                    .unwrap_or(false);
                record.push(flag.to_string());
            }
        }
        if options.include_coordinates {
            record.push(optional_number(row.latitude));
            record.push(optional_number(row.longitude));
            record.push(optional_number(row.map_value));
        }
        wtr.write_record(&record).context(WritingCsvSnafu {})?;
    }

    let bytes = match wtr.into_inner() {
        Ok(b) => b,
        Err(e) => whatever!("Error flushing CSV output: {}", e.error()),
    };
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => whatever!("CSV output is not valid UTF-8: {}", e),
    }
}

/// The detail panel of one jurisdiction.
pub fn render_details(record: &JurisdictionRecord, mentions: u64) -> String {
    let mut out = String::new();
    _ = writeln!(out, "{} ({})", record.name, record.abbreviation);
    _ = writeln!(out, "Region: {}", record.region);
    _ = writeln!(
        out,
        "Data coverage: {:.0}%",
        record.data_availability() * 100.0
    );
    _ = writeln!(out, "Source rows: {}", mentions);
    let sections = detail_sections(record);
    if sections.is_empty() {
        _ = writeln!(out, "\nNo information available.");
    }
    for (field, text) in sections.iter() {
        _ = writeln!(out, "\n{}:\n{}", field.label(), text);
    }
    out.trim_end().to_string()
}

pub fn render_summary(summary: &CoverageSummary) -> String {
    format!(
        "States: {}\nJurisdictions: {}\nWith data: {}\nMean data availability: {:.1}%",
        summary.states,
        summary.jurisdictions,
        summary.with_data,
        summary.mean_availability * 100.0
    )
}
