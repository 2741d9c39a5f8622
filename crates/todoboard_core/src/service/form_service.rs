//! Modal form session for adding and editing records.
//!
//! # Responsibility
//! - Hold the transient draft and dialog visibility for the record form.
//! - Commit the draft through `TodoBoard` on submit.
//!
//! # Invariants
//! - Submit never reaches the store while a draft field is blank.
//! - A failed submit keeps the dialog open with the draft untouched.
//! - A successful submit closes the dialog.

use crate::model::record::{Draft, DraftValidationError, Record, RecordId};
use crate::service::board_service::{DispatchOutcome, TodoBoard};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which record a submit commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    /// Submit dispatches `add`.
    New,
    /// Submit dispatches `edit` for this id.
    Existing(RecordId),
}

/// Errors from form submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// Submit was called while the dialog is closed.
    NotOpen,
    /// Draft failed the non-blank guard.
    Invalid(DraftValidationError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOpen => write!(f, "form is not open"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::NotOpen => None,
        }
    }
}

impl From<DraftValidationError> for FormError {
    fn from(value: DraftValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Dialog state owned by the view layer.
#[derive(Debug, Clone)]
pub struct FormSession {
    open: bool,
    target: FormTarget,
    draft: Draft,
    last_error: Option<DraftValidationError>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Creates a closed form with a blank draft.
    pub fn new() -> Self {
        Self {
            open: false,
            target: FormTarget::New,
            draft: Draft::default(),
            last_error: None,
        }
    }

    /// Opens the dialog with a blank draft for a new record.
    pub fn open_add(&mut self) {
        self.open = true;
        self.target = FormTarget::New;
        self.draft = Draft::default();
        self.last_error = None;
    }

    /// Opens the dialog pre-filled from `record`.
    pub fn open_edit(&mut self, record: &Record) {
        self.open = true;
        self.target = FormTarget::Existing(record.id);
        self.draft = Draft::from_record(record);
        self.last_error = None;
    }

    /// Hides the dialog. The draft is kept until the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn target(&self) -> FormTarget {
        self.target
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn last_error(&self) -> Option<DraftValidationError> {
        self.last_error
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.draft.age = age.into();
    }

    /// Dialog title for the current target.
    pub fn title(&self) -> &'static str {
        match self.target {
            FormTarget::New => "Add New User",
            FormTarget::Existing(_) => "Edit User",
        }
    }

    /// Validates and commits the draft to `board`.
    ///
    /// # Errors
    /// - `NotOpen` when the dialog is closed.
    /// - `Invalid` when a draft field is blank; the dialog stays open.
    pub fn submit(&mut self, board: &mut TodoBoard) -> Result<DispatchOutcome, FormError> {
        if !self.open {
            return Err(FormError::NotOpen);
        }

        let draft = self.draft.clone();
        let result = match self.target {
            FormTarget::New => board.submit_add(draft),
            FormTarget::Existing(id) => board.submit_edit(id, draft),
        };

        match result {
            Ok(outcome) => {
                self.last_error = None;
                self.close();
                Ok(outcome)
            }
            Err(err) => {
                self.last_error = Some(err);
                Err(err.into())
            }
        }
    }
}
