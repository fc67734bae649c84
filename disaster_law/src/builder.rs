use log::{debug, info, warn};
use std::collections::HashMap;

pub use crate::config::*;
use crate::jurisdictions::{lookup, JURISDICTIONS};
use crate::{
    classify_column, find_jurisdiction_column, parse_jurisdiction_names, region_from_file_name,
};

/// Accumulates tables into jurisdiction records.
///
/// Tables are processed in the order they are added. Use this builder when the
/// tables arrive one at a time, for example while files are being read.
///
/// ```
/// use disaster_law::builder::Builder;
/// use disaster_law::{SheetTable, SemanticField};
///
/// let mut builder = Builder::new();
/// builder.add_table(&SheetTable {
///     source: "laws.csv".to_string(),
///     header: vec!["Jurisdiction".to_string(), "Mutual Aid".to_string()],
///     rows: vec![vec![Some("Guam, Puerto Rico".to_string()), Some("EMAC".to_string())]],
/// });
/// let dataset = builder.finish();
/// assert_eq!(dataset.get("Guam").unwrap().field(SemanticField::MutualAid), "EMAC");
/// ```
pub struct Builder {
    records: HashMap<&'static str, JurisdictionRecord>,
    mentions: HashMap<&'static str, u64>,
    tables_read: usize,
    tables_used: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            records: HashMap::new(),
            mentions: HashMap::new(),
            tables_read: 0,
            tables_used: 0,
        }
    }

    /// Adds the content of one table.
    ///
    /// Returns the index of the column used to identify the jurisdictions, or
    /// None if the table has no such column and was skipped.
    pub fn add_table(&mut self, table: &SheetTable) -> Option<usize> {
        self.tables_read += 1;
        let jcol = match find_jurisdiction_column(&table.header) {
            Some(idx) => idx,
            None => {
                debug!(
                    "add_table: {:?}: no jurisdiction column in {:?}, skipping",
                    table.source, table.header
                );
                return None;
            }
        };
        self.tables_used += 1;
        info!(
            "add_table: {:?}: jurisdiction column {:?}, {} rows",
            table.source,
            table.header[jcol],
            table.rows.len()
        );

        // The same for every row of the table.
        let field_columns: Vec<(usize, SemanticField)> = table
            .header
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != jcol)
            .filter_map(|(idx, h)| classify_column(h).map(|f| (idx, f)))
            .collect();
        debug!("add_table: {:?}: field columns {:?}", table.source, field_columns);

        for row_idx in 0..table.rows.len() {
            let names = parse_jurisdiction_names(table.cell(row_idx, jcol));
            for name in names {
                self.add_row_for(table, row_idx, name, &field_columns);
            }
        }
        Some(jcol)
    }

    fn add_row_for(
        &mut self,
        table: &SheetTable,
        row_idx: usize,
        name: &'static str,
        field_columns: &[(usize, SemanticField)],
    ) {
        *self.mentions.entry(name).or_insert(0) += 1;
        let record = self
            .records
            .entry(name)
            .or_insert_with(|| new_record(name));

        for (col, field) in field_columns.iter() {
            if let Some(value) = table.cell(row_idx, *col) {
                if record.set_field(*field, value) {
                    debug!(
                        "add_row_for: {} {} <- {}:{}",
                        name,
                        field.key(),
                        table.source,
                        row_idx + 2
                    );
                }
            }
        }

        // A known region is never replaced.
        if !record.region.is_known() {
            if let Some(region) = region_from_file_name(&table.source, name) {
                debug!("add_row_for: {} region {} from {:?}", name, region, table.source);
                record.region = region;
            }
        }
    }

    /// Completes the dataset with all the jurisdictions and returns it.
    ///
    /// The 56 records are always present. If no table was added, they are all
    /// placeholders and the dataset is flagged with `no_data`.
    pub fn finish(self) -> NormalizedDataset {
        let no_data = self.tables_read == 0;
        if no_data {
            warn!("finish: no data: no table was provided");
        }
        let mut records_by_name = self.records;
        let mut records: Vec<JurisdictionRecord> = Vec::with_capacity(JURISDICTIONS.len());
        let mut mentions: Vec<(String, u64)> = Vec::new();
        for info in JURISDICTIONS.iter() {
            let mut record = match records_by_name.remove(info.name) {
                Some(r) => r,
                None => {
                    debug!("finish: {} absent from all sources", info.name);
                    new_record(info.name)
                }
            };
            if !record.region.is_known() {
                record.region = info.fallback_region;
            }
            if let Some(count) = self.mentions.get(info.name) {
                mentions.push((info.name.to_string(), *count));
            }
            records.push(record);
        }
        info!(
            "finish: {} tables read, {} used, {} jurisdictions with data",
            self.tables_read,
            self.tables_used,
            records.iter().filter(|r| r.has_any_data()).count()
        );
        NormalizedDataset {
            records,
            mentions,
            tables_read: self.tables_read,
            tables_used: self.tables_used,
            no_data,
        }
    }
}

fn new_record(name: &'static str) -> JurisdictionRecord {
    let abbreviation = lookup(name).map(|j| j.abbreviation).unwrap_or("");
    JurisdictionRecord::empty(name, abbreviation)
}
