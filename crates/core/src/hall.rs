//! Venue hall model.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::HallId;

/// A venue subdivision visitors can be assigned to.
///
/// Loaded wholesale from the registrant store at screen mount and reloaded
/// after any mutation that may have changed availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hall {
    pub id: HallId,
    /// Unique display name, e.g. `"Blue Hall"`.
    pub name: String,
    /// Total seats. Never negative.
    pub capacity: i64,
    /// Seats still unassigned. `0 <= availability <= capacity`.
    pub availability: i64,
}

impl Hall {
    /// Check the capacity/availability invariants on a loaded record.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.capacity < 0 {
            return Err(CoreError::Validation(format!(
                "Hall '{}' has negative capacity {}",
                self.name, self.capacity
            )));
        }
        if self.availability < 0 || self.availability > self.capacity {
            return Err(CoreError::Validation(format!(
                "Hall '{}' availability {} outside 0..={}",
                self.name, self.availability, self.capacity
            )));
        }
        Ok(())
    }
}

/// Look up a hall by display name.
pub fn hall_by_name<'a>(halls: &'a [Hall], name: &str) -> Option<&'a Hall> {
    halls.iter().find(|h| h.name == name)
}

/// Look up a hall by store id.
pub fn hall_by_id(halls: &[Hall], id: HallId) -> Option<&Hall> {
    halls.iter().find(|h| h.id == id)
}
