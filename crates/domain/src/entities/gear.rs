//! Exotic gear - unique items a pilot acquires and loses through log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::GearName;
use lancerlog_domain::{GearId, LogEntryId, PilotId};

/// A piece of exotic gear in a pilot's inventory.
///
/// Gear is never deleted by the log workflow. Losing it records the log that
/// took it away; deleting that log gives it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExoticGear {
    pub id: GearId,
    pub pilot_id: PilotId,
    pub name: GearName,
    pub description: Option<String>,
    pub notes: Option<String>,
    /// Log that granted the gear, if it came from one
    pub acquired_log_id: Option<LogEntryId>,
    /// Log that took the gear away
    pub lost_log_id: Option<LogEntryId>,
    pub acquired_at: DateTime<Utc>,
}

impl ExoticGear {
    pub fn new(pilot_id: PilotId, name: GearName, now: DateTime<Utc>) -> Self {
        Self {
            id: GearId::new(),
            pilot_id,
            name,
            description: None,
            notes: None,
            acquired_log_id: None,
            lost_log_id: None,
            acquired_at: now,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn acquired_in(mut self, log_id: LogEntryId) -> Self {
        self.acquired_log_id = Some(log_id);
        self
    }

    pub fn is_lost(&self) -> bool {
        self.lost_log_id.is_some()
    }

    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if the gear is already lost.
    pub fn mark_lost(&mut self, log_id: LogEntryId) -> Result<(), DomainError> {
        if let Some(previous) = self.lost_log_id {
            return Err(DomainError::constraint(format!(
                "Gear {} was already lost in log {}",
                self.id, previous
            )));
        }
        self.lost_log_id = Some(log_id);
        Ok(())
    }

    /// Undo a loss recorded by `log_id`. Returns whether anything changed.
    pub fn restore_if_lost_in(&mut self, log_id: LogEntryId) -> bool {
        if self.lost_log_id == Some(log_id) {
            self.lost_log_id = None;
            true
        } else {
            false
        }
    }
}
