// ********* Input data structures ***********

use std::fmt::Display;

/// One worksheet, as handed over by a spreadsheet reader.
///
/// The first row of the sheet is the header. Data rows may be shorter than the
/// header: missing trailing cells are read as missing values.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SheetTable {
    /// The name of the file the sheet was read from (without directories).
    /// Some region conventions are encoded in it.
    pub source: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl SheetTable {
    /// The content of a cell, if present.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }
}

// ******** Output data structures *********

/// Coarse geographic grouping of the jurisdictions.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Region {
    Southeast,
    MidAtlantic,
    Northeast,
    Midwest,
    MountainWest,
    WestCoast,
    Southwest,
    Appalachia,
    AlaskaHawaii,
    Territories,
    Unknown,
}

impl Region {
    pub const ALL: [Region; 11] = [
        Region::Southeast,
        Region::MidAtlantic,
        Region::Northeast,
        Region::Midwest,
        Region::MountainWest,
        Region::WestCoast,
        Region::Southwest,
        Region::Appalachia,
        Region::AlaskaHawaii,
        Region::Territories,
        Region::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Southeast => "Southeast",
            Region::MidAtlantic => "Mid-Atlantic",
            Region::Northeast => "Northeast",
            Region::Midwest => "Midwest",
            Region::MountainWest => "Mountain West",
            Region::WestCoast => "West Coast",
            Region::Southwest => "Southwest",
            Region::Appalachia => "Appalachia",
            Region::AlaskaHawaii => "Alaska & Hawaii",
            Region::Territories => "Territories",
            Region::Unknown => "Unknown",
        }
    }

    /// Reads a region from its label. The comparison ignores the case.
    pub fn from_label(label: &str) -> Option<Region> {
        let l = label.trim();
        Region::ALL
            .iter()
            .find(|r| r.label().eq_ignore_ascii_case(l))
            .cloned()
    }

    pub fn is_known(&self) -> bool {
        *self != Region::Unknown
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The free-text categories of disaster-law information.
///
/// Source spreadsheets name their columns freely; each column is mapped to at
/// most one of these fields.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum SemanticField {
    KeyStatutes,
    LocalAuthority,
    NotableProvisions,
    VulnerableProtections,
    CivilRights,
    DisabilityNeeds,
    LanguageAccess,
    EquityInitiatives,
    EmergencyDeclaration,
    MitigationPlanning,
    MutualAid,
}

impl SemanticField {
    pub const COUNT: usize = 11;

    /// All the fields, in output order.
    pub const ALL: [SemanticField; SemanticField::COUNT] = [
        SemanticField::KeyStatutes,
        SemanticField::LocalAuthority,
        SemanticField::NotableProvisions,
        SemanticField::VulnerableProtections,
        SemanticField::CivilRights,
        SemanticField::DisabilityNeeds,
        SemanticField::LanguageAccess,
        SemanticField::EquityInitiatives,
        SemanticField::EmergencyDeclaration,
        SemanticField::MitigationPlanning,
        SemanticField::MutualAid,
    ];

    /// The column name used in the normalized table.
    pub fn key(&self) -> &'static str {
        match self {
            SemanticField::KeyStatutes => "key_statutes",
            SemanticField::LocalAuthority => "local_authority",
            SemanticField::NotableProvisions => "notable_provisions",
            SemanticField::VulnerableProtections => "vulnerable_protections",
            SemanticField::CivilRights => "civil_rights",
            SemanticField::DisabilityNeeds => "disability_needs",
            SemanticField::LanguageAccess => "language_access",
            SemanticField::EquityInitiatives => "equity_initiatives",
            SemanticField::EmergencyDeclaration => "emergency_declaration",
            SemanticField::MitigationPlanning => "mitigation_planning",
            SemanticField::MutualAid => "mutual_aid",
        }
    }

    /// A human-readable title.
    pub fn label(&self) -> &'static str {
        match self {
            SemanticField::KeyStatutes => "Key Statutes",
            SemanticField::LocalAuthority => "Local Authority",
            SemanticField::NotableProvisions => "Notable Provisions",
            SemanticField::VulnerableProtections => "Vulnerable Population Protections",
            SemanticField::CivilRights => "Civil Rights",
            SemanticField::DisabilityNeeds => "Disability & Functional Needs",
            SemanticField::LanguageAccess => "Language Access",
            SemanticField::EquityInitiatives => "Equity Initiatives",
            SemanticField::EmergencyDeclaration => "Emergency Declaration",
            SemanticField::MitigationPlanning => "Mitigation Planning",
            SemanticField::MutualAid => "Mutual Aid",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// True if the text carries information: not blank, and not the "nan"
/// placeholder that spreadsheet exports leave in empty cells.
pub fn is_meaningful(value: &str) -> bool {
    let v = value.trim();
    !v.is_empty() && v != "nan"
}

/// The normalized record for one state or territory.
#[derive(PartialEq, Debug, Clone)]
pub struct JurisdictionRecord {
    pub name: String,
    pub abbreviation: String,
    pub region: Region,
    fields: [String; SemanticField::COUNT],
}

impl JurisdictionRecord {
    /// A record with no data and an unknown region.
    pub fn empty(name: &str, abbreviation: &str) -> JurisdictionRecord {
        JurisdictionRecord {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            region: Region::Unknown,
            fields: Default::default(),
        }
    }

    pub fn field(&self, field: SemanticField) -> &str {
        self.fields[field.index()].as_str()
    }

    /// Replaces the value of a field. Values without content are ignored, so
    /// that an empty cell never erases what an earlier source provided.
    ///
    /// Returns true if the value was stored.
    pub fn set_field(&mut self, field: SemanticField, value: &str) -> bool {
        if !is_meaningful(value) {
            return false;
        }
        self.fields[field.index()] = value.to_string();
        true
    }

    pub fn has_field(&self, field: SemanticField) -> bool {
        is_meaningful(self.field(field))
    }

    /// The fields in output order, with their values.
    pub fn fields(&self) -> impl Iterator<Item = (SemanticField, &str)> {
        SemanticField::ALL.iter().map(|f| (*f, self.field(*f)))
    }

    /// Fraction of the semantic fields that carry information, in [0, 1].
    ///
    /// This is always derived from the current content of the fields.
    pub fn data_availability(&self) -> f64 {
        let filled = SemanticField::ALL
            .iter()
            .filter(|f| self.has_field(**f))
            .count();
        filled as f64 / SemanticField::COUNT as f64
    }

    pub fn has_any_data(&self) -> bool {
        SemanticField::ALL.iter().any(|f| self.has_field(*f))
    }
}

/// The result of a normalization run.
#[derive(PartialEq, Debug, Clone)]
pub struct NormalizedDataset {
    /// Exactly one record per known jurisdiction, in canonical order.
    pub records: Vec<JurisdictionRecord>,
    /// Number of source rows that named each jurisdiction.
    /// Jurisdictions never mentioned are absent.
    pub mentions: Vec<(String, u64)>,
    /// Number of tables handed to the pipeline.
    pub tables_read: usize,
    /// Number of tables that had a jurisdiction column.
    pub tables_used: usize,
    /// True when no table was provided: no file was found, or none could be
    /// read. The records are then all placeholders.
    pub no_data: bool,
}

impl NormalizedDataset {
    pub fn get(&self, name: &str) -> Option<&JurisdictionRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn mention_count(&self, name: &str) -> u64 {
        self.mentions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }
}
