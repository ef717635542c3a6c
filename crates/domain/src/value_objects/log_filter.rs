//! Filters for the GM-wide log listing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::{LogEntry, LogType};
use crate::error::DomainError;
use crate::PilotId;

/// Largest page a GM listing may request.
pub const MAX_PAGE_LIMIT: u32 = 200;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Which way a log moved a pilot's resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceDirection {
    /// Any positive manna or downtime change
    Increase,
    /// Any negative manna or downtime change
    Decrease,
}

impl ResourceDirection {
    pub fn matches(&self, log: &LogEntry) -> bool {
        match self {
            Self::Increase => log.manna_change > 0 || log.downtime_change > 0,
            Self::Decrease => log.manna_change < 0 || log.downtime_change < 0,
        }
    }
}

impl fmt::Display for ResourceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increase => write!(f, "increase"),
            Self::Decrease => write!(f, "decrease"),
        }
    }
}

impl FromStr for ResourceDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increase" => Ok(Self::Increase),
            "decrease" => Ok(Self::Decrease),
            other => Err(DomainError::parse(format!(
                "Unknown resource direction: {}",
                other
            ))),
        }
    }
}

/// Filter and page over every pilot's logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    pub pilot_id: Option<PilotId>,
    pub log_type: Option<LogType>,
    pub resource_direction: Option<ResourceDirection>,
    limit: u32,
    pub offset: u32,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            pilot_id: None,
            log_type: None,
            resource_direction: None,
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl LogFilter {
    pub fn with_limit(limit: u32) -> Self {
        Self::default().limit(limit)
    }

    /// Set the page size, clamped to `1..=200`.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, MAX_PAGE_LIMIT);
        self
    }

    pub fn for_pilot(mut self, pilot_id: PilotId) -> Self {
        self.pilot_id = Some(pilot_id);
        self
    }

    pub fn of_type(mut self, log_type: LogType) -> Self {
        self.log_type = Some(log_type);
        self
    }

    pub fn direction(mut self, direction: ResourceDirection) -> Self {
        self.resource_direction = Some(direction);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn page_limit(&self) -> u32 {
        self.limit
    }

    pub fn matches(&self, log: &LogEntry) -> bool {
        self.pilot_id.map_or(true, |id| log.pilot_id == id)
            && self.log_type.map_or(true, |t| log.log_type == t)
            && self
                .resource_direction
                .map_or(true, |direction| direction.matches(log))
    }

    /// Apply the filter to logs already sorted newest first.
    pub fn apply(&self, logs: Vec<LogEntry>) -> Vec<LogEntry> {
        logs.into_iter()
            .filter(|log| self.matches(log))
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .collect()
    }
}
