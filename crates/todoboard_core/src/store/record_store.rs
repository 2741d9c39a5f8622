//! Record store reducer.
//!
//! # Responsibility
//! - Hold one immutable snapshot of the record sequence.
//! - Produce the next snapshot for each action without side effects.
//!
//! # Invariants
//! - Record ids are pairwise distinct in every snapshot.
//! - `next_id` is strictly greater than every id in the snapshot, and ids
//!   of removed records are never issued again.
//! - Order is insertion order; no transition reorders records.
//! - Transitions never fail. Lookup misses and unknown actions return an
//!   equal snapshot.

use crate::model::action::Action;
use crate::model::record::{Age, Draft, Record, RecordId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIRST_RECORD_ID: RecordId = 1;

/// Errors from building a store out of caller-provided records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Two input records share one id.
    DuplicateId(RecordId),
    /// The largest input id leaves no room for new ids.
    IdSpaceExhausted,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate record id: {id}"),
            Self::IdSpaceExhausted => write!(f, "record id space exhausted"),
        }
    }
}

impl Error for StoreError {}

/// Snapshot of the ordered record sequence plus its id counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: RecordId,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl RecordStore {
    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            next_id: FIRST_RECORD_ID,
        }
    }

    /// Creates the startup store shown when a session begins.
    pub fn seeded() -> Self {
        Self {
            records: vec![
                Record::new(1, "Ali", Age::Years(12)).with_complete(true),
                Record::new(4, "Maga", Age::Years(15)),
                Record::new(5, "Gapizuer", Age::Years(17)),
            ],
            next_id: 6,
        }
    }

    /// Builds a store from existing records, keeping their order.
    ///
    /// # Errors
    /// - `DuplicateId` when two records share an id.
    /// - `IdSpaceExhausted` when a record already uses `RecordId::MAX`.
    pub fn from_records(records: Vec<Record>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
        }

        let next_id = match records.iter().map(|record| record.id).max() {
            Some(max_id) => max_id
                .checked_add(1)
                .ok_or(StoreError::IdSpaceExhausted)?,
            None => FIRST_RECORD_ID,
        };

        Ok(Self { records, next_id })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Id the next `add` will assign.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    /// Applies one action and returns the next snapshot.
    pub fn apply(&self, action: &Action) -> Self {
        match action {
            Action::Add { draft } => self.add(draft),
            Action::Edit { id, draft } => self.edit(*id, draft),
            Action::Remove { id } => self.remove(*id),
            Action::ToggleComplete { id } => self.toggle_complete(*id),
            Action::Unknown => self.clone(),
        }
    }

    /// Appends a new incomplete record built from `draft`.
    ///
    /// The draft is not validated here. When the counter cannot advance
    /// past `RecordId::MAX` the snapshot is returned unchanged.
    pub fn add(&self, draft: &Draft) -> Self {
        let id = self.next_id;
        let Some(next_id) = id.checked_add(1) else {
            return self.clone();
        };

        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend_from_slice(&self.records);
        records.push(Record::new(id, draft.name.clone(), draft.parsed_age()));
        Self { records, next_id }
    }

    /// Replaces name and age of the matching record in place.
    pub fn edit(&self, id: RecordId, draft: &Draft) -> Self {
        self.map_matching(id, |record| Record {
            name: draft.name.clone(),
            age: draft.parsed_age(),
            ..record.clone()
        })
    }

    /// Drops the matching record.
    pub fn remove(&self, id: RecordId) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|record| record.id != id)
                .cloned()
                .collect(),
            next_id: self.next_id,
        }
    }

    /// Flips `complete` on the matching record.
    pub fn toggle_complete(&self, id: RecordId) -> Self {
        self.map_matching(id, |record| Record {
            complete: !record.complete,
            ..record.clone()
        })
    }

    fn map_matching(&self, id: RecordId, update: impl Fn(&Record) -> Record) -> Self {
        Self {
            records: self
                .records
                .iter()
                .map(|record| {
                    if record.id == id {
                        update(record)
                    } else {
                        record.clone()
                    }
                })
                .collect(),
            next_id: self.next_id,
        }
    }
}
