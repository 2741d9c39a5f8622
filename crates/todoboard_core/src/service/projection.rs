//! Read-only view projections of the record sequence.
//!
//! Both projections are derived on demand and never written back.

use crate::model::record::{Age, Record, RecordId};

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: RecordId,
    pub name: String,
    pub age: Age,
    /// `active` or `inactive`.
    pub status: &'static str,
}

impl From<&Record> for TableRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            age: record.age,
            status: record.status_label(),
        }
    }
}

/// One side panel list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelItem {
    pub id: RecordId,
    /// `Name: <name>`
    pub primary: String,
    /// `Status: <status>, Age: <age>`
    pub secondary: String,
}

impl From<&Record> for PanelItem {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            primary: format!("Name: {}", record.name),
            secondary: format!("Status: {}, Age: {}", record.status_label(), record.age),
        }
    }
}

pub fn table_rows(records: &[Record]) -> Vec<TableRow> {
    records.iter().map(TableRow::from).collect()
}

pub fn panel_items(records: &[Record]) -> Vec<PanelItem> {
    records.iter().map(PanelItem::from).collect()
}
