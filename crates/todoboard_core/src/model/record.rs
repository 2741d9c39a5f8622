//! Record and draft model.
//!
//! # Responsibility
//! - Define the canonical to-do entry owned by the record store.
//! - Define the transient draft the form collects before commit.
//! - Convert free-form age text into a numeric age explicitly.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changes.
//! - `complete` starts as `false` for every newly added record.
//! - Age conversion never fails; unparseable text becomes `Age::NotANumber`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identifier, unique within one record sequence.
pub type RecordId = u64;

/// Numeric age parsed from form text.
///
/// Serialized as a JSON integer, or `null` for `NotANumber`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum Age {
    /// Whole-number age.
    Years(i64),
    /// Input text was not a whole number.
    NotANumber,
}

impl Age {
    /// Returns the numeric value when present.
    pub fn years(self) -> Option<i64> {
        match self {
            Self::Years(value) => Some(value),
            Self::NotANumber => None,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Self::NotANumber)
    }
}

impl Display for Age {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Years(value) => write!(f, "{value}"),
            Self::NotANumber => write!(f, "NaN"),
        }
    }
}

impl From<i64> for Age {
    fn from(value: i64) -> Self {
        Self::Years(value)
    }
}

impl From<Option<i64>> for Age {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::NotANumber, Self::Years)
    }
}

impl From<Age> for Option<i64> {
    fn from(value: Age) -> Self {
        value.years()
    }
}

/// Converts form age text into an `Age`.
///
/// # Contract
/// - Surrounding whitespace is ignored.
/// - Empty text converts to `Age::Years(0)`.
/// - Signed decimal integers convert directly.
/// - Finite float literals without a fractional part (`"12.0"`, `"1e1"`)
///   convert when they fit `i64`.
/// - Fractional values (`"1.5"`) convert to `Age::NotANumber`; they are
///   never rounded or truncated.
/// - Everything else converts to `Age::NotANumber`.
pub fn parse_age(text: &str) -> Age {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Age::Years(0);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Age::Years(value);
    }

    match trimmed.parse::<f64>() {
        // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
        Ok(value)
            if value.is_finite()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64 =>
        {
            Age::Years(value as i64)
        }
        _ => Age::NotANumber,
    }
}

/// Canonical to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Assigned by the store at creation.
    pub id: RecordId,
    pub name: String,
    pub age: Age,
    pub complete: bool,
}

impl Record {
    /// Creates an incomplete record.
    pub fn new(id: RecordId, name: impl Into<String>, age: Age) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            complete: false,
        }
    }

    /// Builder-style setter used by seed data and tests.
    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }

    /// Status text shown in the table and side panel.
    pub fn status_label(&self) -> &'static str {
        if self.complete {
            "active"
        } else {
            "inactive"
        }
    }
}

/// Transient form input for one record, owned by the view layer.
///
/// Both fields hold raw text exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub age: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }

    /// Pre-fills a draft from an existing record for editing.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age.to_string(),
        }
    }

    /// Submit guard: both fields must be non-blank after trimming.
    ///
    /// The record store never calls this; callers check before dispatch.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.name.trim().is_empty() {
            return Err(DraftValidationError::BlankName);
        }
        if self.age.trim().is_empty() {
            return Err(DraftValidationError::BlankAge);
        }
        Ok(())
    }

    /// Age conversion applied when the draft is committed.
    pub fn parsed_age(&self) -> Age {
        parse_age(&self.age)
    }
}

/// Submit guard failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    BlankName,
    BlankAge,
}

impl DraftValidationError {
    /// Stable machine-readable reason for logs and FFI envelopes.
    pub fn reason(self) -> &'static str {
        match self {
            Self::BlankName => "blank_name",
            Self::BlankAge => "blank_age",
        }
    }
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::BlankAge => write!(f, "age must not be blank"),
        }
    }
}

impl Error for DraftValidationError {}
