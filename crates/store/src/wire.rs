//! Wire shapes for the registrant store REST dialect.
//!
//! The store's JSON is flatter than the domain model: attendance is the
//! string `"1"` for confirmed (any other value is pending, null is unset)
//! and halls are referenced by integer id. Every translation between the
//! two worlds happens in this module, in both directions, so no other crate
//! ever sees a wire encoding.

use serde::{Deserialize, Serialize};

use regdesk_core::hall::{hall_by_id, Hall};
use regdesk_core::types::HallId;
use regdesk_core::visitor::{Attendance, Visitor, VisitorDraft};

/// Attendance value the store uses for a confirmed visitor.
pub const ATTENDANCE_CONFIRMED: &str = "1";

/// A visitor row as the store returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// `"1"` for confirmed; anything else is pending, null is unset.
    #[serde(default)]
    pub attendance: Option<String>,
    /// Store id of the assigned hall, if any.
    #[serde(default)]
    pub hall: Option<HallId>,
}

/// Body for `POST /visitors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVisitor {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub country: Option<String>,
    pub attendance: Option<String>,
    pub hall: Option<HallId>,
}

/// Partial body for `PUT /visitors/{id}`.
///
/// The only edit flow the desk has is hall (re)assignment, so the patch
/// carries exactly the fields the store requires: the id and the new hall
/// reference (null clears the assignment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorPatch {
    pub id: String,
    pub hall: Option<HallId>,
}

/// Decode a wire attendance value.
pub fn attendance_from_wire(value: Option<&str>) -> Option<Attendance> {
    match value {
        Some(ATTENDANCE_CONFIRMED) => Some(Attendance::Confirmed),
        Some(_) => Some(Attendance::Pending),
        None => None,
    }
}

/// Encode a domain attendance value. Only confirmed visitors carry a
/// marker on the wire; pending and unset are both null.
pub fn attendance_to_wire(value: Option<Attendance>) -> Option<String> {
    match value {
        Some(Attendance::Confirmed) => Some(ATTENDANCE_CONFIRMED.to_string()),
        Some(Attendance::Pending) | None => None,
    }
}

impl VisitorRecord {
    /// Resolve a wire row into the domain model.
    ///
    /// The hall id is resolved to its display name against the loaded hall
    /// list; an id with no matching hall reads as unassigned. Null text
    /// fields read as empty strings.
    pub fn into_domain(self, halls: &[Hall]) -> Visitor {
        let hall = self
            .hall
            .and_then(|id| hall_by_id(halls, id))
            .map(|h| h.name.clone());
        Visitor {
            id: self.id,
            name: self.name,
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            organization: self.organization.unwrap_or_default(),
            job_title: self.job_title.unwrap_or_default(),
            department: self.department,
            country: self.country,
            attendance: attendance_from_wire(self.attendance.as_deref()),
            hall,
        }
    }
}

impl NewVisitor {
    /// Encode a validated draft for `POST /visitors`.
    ///
    /// The hall reference must already be resolved to a store id by the
    /// caller (the screen validates the hall name against its loaded list).
    /// Empty optional text fields are sent as null.
    pub fn from_draft(draft: &VisitorDraft, hall: Option<HallId>) -> Self {
        Self {
            name: draft.name.clone(),
            email: none_if_empty(&draft.email),
            phone: none_if_empty(&draft.phone),
            organization: none_if_empty(&draft.organization),
            department: draft.department.clone(),
            job_title: none_if_empty(&draft.job_title),
            country: draft.country.clone(),
            attendance: attendance_to_wire(draft.attendance),
            hall,
        }
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
