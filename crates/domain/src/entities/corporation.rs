//! Corporations and a pilot's standing with them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value_objects::CorporationName;
use lancerlog_domain::{CorporationId, LogEntryId, PilotId, ReputationChangeId};

/// A corporation pilots can earn or lose reputation with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corporation {
    pub id: CorporationId,
    pub name: CorporationName,
    pub description: Option<String>,
}

impl Corporation {
    pub fn new(name: CorporationName) -> Self {
        Self {
            id: CorporationId::new(),
            name,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A reputation delta recorded by a log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationChange {
    pub id: ReputationChangeId,
    pub log_entry_id: LogEntryId,
    pub pilot_id: PilotId,
    pub corporation_id: CorporationId,
    pub change_value: i32,
    pub notes: Option<String>,
}

impl ReputationChange {
    pub fn new(
        log_entry_id: LogEntryId,
        pilot_id: PilotId,
        corporation_id: CorporationId,
        change_value: i32,
    ) -> Self {
        Self {
            id: ReputationChangeId::new(),
            log_entry_id,
            pilot_id,
            corporation_id,
            change_value,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// Net reputation per corporation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationStanding {
    pub corporation_id: CorporationId,
    pub value: i32,
}

impl ReputationStanding {
    /// Sum changes per corporation, ordered by corporation id.
    pub fn tally<'a>(changes: impl IntoIterator<Item = &'a ReputationChange>) -> Vec<Self> {
        let mut totals: BTreeMap<CorporationId, i32> = BTreeMap::new();
        for change in changes {
            let value = totals.entry(change.corporation_id).or_insert(0);
            *value = value.saturating_add(change.change_value);
        }
        totals
            .into_iter()
            .map(|(corporation_id, value)| Self {
                corporation_id,
                value,
            })
            .collect()
    }
}
