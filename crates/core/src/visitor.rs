//! Visitor (registrant) domain model.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::VisitorId;

/// Attendance status of a visitor.
///
/// The registrant store encodes this as the string `"1"` for confirmed and
/// null (or anything else) for pending/unset; that mapping lives in the
/// store wire layer, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Confirmed,
    Pending,
}

/// A registrant as the desk sees it.
///
/// `id` is assigned by the registrant store on creation and is immutable
/// afterwards. `hall` holds the assigned hall's display name, resolved from
/// the store's integer reference when the record is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    pub id: VisitorId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub job_title: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub attendance: Option<Attendance>,
    #[serde(default)]
    pub hall: Option<String>,
}

/// Input for creating a new visitor. The store assigns the id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitorDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub job_title: String,
    pub department: Option<String>,
    pub country: Option<String>,
    pub attendance: Option<Attendance>,
    /// Hall display name; must match a loaded hall when set.
    pub hall: Option<String>,
}

impl VisitorDraft {
    /// Validate the draft before anything is sent over the wire.
    ///
    /// Name and email are required and must be non-blank; every other field
    /// may be empty or unset.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(CoreError::Validation("email is required".to_string()));
        }
        Ok(())
    }
}
