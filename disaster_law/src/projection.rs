//! Views on the normalized records, as consumed by the map and the detail
//! panel: data categories, filters, coverage summaries.

use crate::config::*;
use crate::jurisdictions::lookup;

/// The data categories offered as filters. Each one is backed by a single
/// semantic field.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Category {
    VulnerableProtections,
    EquityInitiatives,
    CivilRights,
    LanguageAccess,
    DisabilityProvisions,
    EmergencyPowers,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::VulnerableProtections,
        Category::EquityInitiatives,
        Category::CivilRights,
        Category::LanguageAccess,
        Category::DisabilityProvisions,
        Category::EmergencyPowers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::VulnerableProtections => "Vulnerable Protections",
            Category::EquityInitiatives => "Equity Initiatives",
            Category::CivilRights => "Civil Rights",
            Category::LanguageAccess => "Language Access",
            Category::DisabilityProvisions => "Disability Provisions",
            Category::EmergencyPowers => "Emergency Powers",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::VulnerableProtections => "vulnerable_protections",
            Category::EquityInitiatives => "equity_initiatives",
            Category::CivilRights => "civil_rights",
            Category::LanguageAccess => "language_access",
            Category::DisabilityProvisions => "disability_provisions",
            Category::EmergencyPowers => "emergency_powers",
        }
    }

    pub fn field(&self) -> SemanticField {
        match self {
            Category::VulnerableProtections => SemanticField::VulnerableProtections,
            Category::EquityInitiatives => SemanticField::EquityInitiatives,
            Category::CivilRights => SemanticField::CivilRights,
            Category::LanguageAccess => SemanticField::LanguageAccess,
            Category::DisabilityProvisions => SemanticField::DisabilityNeeds,
            Category::EmergencyPowers => SemanticField::EmergencyDeclaration,
        }
    }

    /// Accepts either the label ("Civil Rights") or the key ("civil_rights"),
    /// in any case.
    pub fn parse(s: &str) -> Option<Category> {
        let t = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(t) || c.key().eq_ignore_ascii_case(t))
            .cloned()
    }
}

pub fn has_data(record: &JurisdictionRecord, category: Category) -> bool {
    record.has_field(category.field())
}

/// The presence flag of every category, in [Category::ALL] order.
pub fn category_flags(record: &JurisdictionRecord) -> Vec<(Category, bool)> {
    Category::ALL
        .iter()
        .map(|c| (*c, has_data(record, *c)))
        .collect()
}

/// Keeps the records that match both filters. A missing filter keeps all.
pub fn filter_records<'a>(
    records: &'a [JurisdictionRecord],
    region: Option<Region>,
    category: Option<Category>,
) -> Vec<&'a JurisdictionRecord> {
    records
        .iter()
        .filter(|r| region.map(|reg| r.region == reg).unwrap_or(true))
        .filter(|r| category.map(|c| has_data(r, c)).unwrap_or(true))
        .collect()
}

/// The value used to color a jurisdiction on the map.
///
/// Jurisdictions without data stay at 0. Any data at all lifts the value to
/// at least 0.3, so that sparse coverage stays visible.
pub fn color_value(record: &JurisdictionRecord) -> f64 {
    let a = record.data_availability();
    if a == 0.0 {
        0.0
    } else {
        a.max(0.3)
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct CoverageSummary {
    /// The 50 states only.
    pub states: usize,
    /// States, the District of Columbia and territories.
    pub jurisdictions: usize,
    pub with_data: usize,
    pub mean_availability: f64,
}

pub fn summarize(records: &[&JurisdictionRecord]) -> CoverageSummary {
    let states = records
        .iter()
        .filter(|r| lookup(&r.name).map(|j| j.is_state).unwrap_or(false))
        .count();
    let with_data = records.iter().filter(|r| r.has_any_data()).count();
    let mean_availability = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.data_availability()).sum::<f64>() / records.len() as f64
    };
    CoverageSummary {
        states,
        jurisdictions: records.len(),
        with_data,
        mean_availability,
    }
}

/// Shortens a text to at most `max_chars` characters, marking the cut with an
/// ellipsis.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

// The longest texts are cut in the detail panel. The panel of the District
// of Columbia and the territories is narrower.
fn display_limit(field: SemanticField, is_state: bool) -> Option<usize> {
    match field {
        SemanticField::VulnerableProtections if is_state => Some(300),
        SemanticField::VulnerableProtections => Some(200),
        SemanticField::KeyStatutes => Some(200),
        _ => None,
    }
}

/// The sections of the detail panel: every field with data, in output order.
pub fn detail_sections(record: &JurisdictionRecord) -> Vec<(SemanticField, String)> {
    let is_state = lookup(&record.name).map(|j| j.is_state).unwrap_or(false);
    record
        .fields()
        .filter(|(_, v)| is_meaningful(v))
        .map(|(f, v)| {
            let text = match display_limit(f, is_state) {
                Some(limit) => truncate_for_display(v, limit),
                None => v.to_string(),
            };
            (f, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        name: &str,
        abbreviation: &str,
        fields: &[(SemanticField, &str)],
    ) -> JurisdictionRecord {
        let mut r = JurisdictionRecord::empty(name, abbreviation);
        for (f, v) in fields {
            r.set_field(*f, v);
        }
        r
    }

    #[test]
    fn categories_follow_their_fields() {
        let r = record(
            "Ohio",
            "OH",
            &[
                (SemanticField::DisabilityNeeds, "ADA plans"),
                (SemanticField::EmergencyDeclaration, "ORC 5502"),
            ],
        );
        assert!(has_data(&r, Category::DisabilityProvisions));
        assert!(has_data(&r, Category::EmergencyPowers));
        assert!(!has_data(&r, Category::CivilRights));
        let flags = category_flags(&r);
        assert_eq!(flags.iter().filter(|(_, b)| *b).count(), 2);
    }

    #[test]
    fn category_parsing() {
        assert_eq!(Category::parse("civil rights"), Some(Category::CivilRights));
        assert_eq!(
            Category::parse("disability_provisions"),
            Some(Category::DisabilityProvisions)
        );
        assert_eq!(Category::parse("All"), None);
    }

    #[test]
    fn filters_combine() {
        let mut a = record("Ohio", "OH", &[(SemanticField::CivilRights, "x")]);
        a.region = Region::Midwest;
        let mut b = record("Iowa", "IA", &[]);
        b.region = Region::Midwest;
        let mut c = record("Texas", "TX", &[(SemanticField::CivilRights, "y")]);
        c.region = Region::Southwest;
        let all = vec![a, b, c];

        assert_eq!(filter_records(&all, None, None).len(), 3);
        assert_eq!(filter_records(&all, Some(Region::Midwest), None).len(), 2);
        let both = filter_records(&all, Some(Region::Midwest), Some(Category::CivilRights));
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].name, "Ohio");
    }

    #[test]
    fn summary_counts_states_apart() {
        let a = record("Ohio", "OH", &[(SemanticField::MutualAid, "EMAC")]);
        let b = record("Guam", "GU", &[]);
        let c = record("District of Columbia", "DC", &[]);
        let s = summarize(&[&a, &b, &c]);
        assert_eq!(s.states, 1);
        assert_eq!(s.jurisdictions, 3);
        assert_eq!(s.with_data, 1);
        assert!((s.mean_availability - 1.0 / 33.0).abs() < 1e-12);
        assert_eq!(summarize(&[]).mean_availability, 0.0);
    }

    #[test]
    fn color_floor() {
        let empty = record("Ohio", "OH", &[]);
        assert_eq!(color_value(&empty), 0.0);
        let sparse = record("Ohio", "OH", &[(SemanticField::MutualAid, "EMAC")]);
        assert_eq!(color_value(&sparse), 0.3);
    }

    #[test]
    fn details_are_truncated() {
        let long = "a".repeat(250);
        let r = record(
            "Ohio",
            "OH",
            &[
                (SemanticField::KeyStatutes, long.as_str()),
                (SemanticField::EquityInitiatives, long.as_str()),
            ],
        );
        let sections = detail_sections(&r);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0, SemanticField::KeyStatutes);
        assert_eq!(sections[0].1.chars().count(), 203);
        assert!(sections[0].1.ends_with("..."));
        assert_eq!(sections[1].1, long);
        assert_eq!(truncate_for_display("short", 10), "short");
    }

    #[test]
    fn territory_panels_are_narrower() {
        let long = "b".repeat(250);
        let state = record(
            "Ohio",
            "OH",
            &[(SemanticField::VulnerableProtections, long.as_str())],
        );
        assert_eq!(detail_sections(&state)[0].1, long);

        for (name, code) in [("Puerto Rico", "PR"), ("District of Columbia", "DC")] {
            let r = record(
                name,
                code,
                &[(SemanticField::VulnerableProtections, long.as_str())],
            );
            let sections = detail_sections(&r);
            assert_eq!(sections[0].1.chars().count(), 203);
            assert!(sections[0].1.ends_with("..."));
        }
    }
}
