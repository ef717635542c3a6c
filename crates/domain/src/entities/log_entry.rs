//! Log entry entity - the append-only record of a session or trade
//!
//! Every change to a pilot's resources, License Level, personal clocks,
//! gear and reputation is expressed as a log entry. The pilot's stored state
//! is recomputed from the full set of entries after any of them changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use lancerlog_domain::{ClockId, CorporationId, GearId, LogEntryId, PilotId};

/// Default ceiling for a single entry's LL tick delta.
pub const DEFAULT_MAX_LL_CLOCK_CHANGE: i32 = 25;

/// Type of log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    /// A played session
    Game,
    /// A trade or other downtime bookkeeping
    Trade,
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogType::Game => write!(f, "game"),
            LogType::Trade => write!(f, "trade"),
        }
    }
}

impl FromStr for LogType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "game" => Ok(LogType::Game),
            "trade" => Ok(LogType::Trade),
            other => Err(DomainError::parse(format!("Unknown log type: {}", other))),
        }
    }
}

/// Ticks a log entry applies to one personal clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockProgressEntry {
    pub clock_id: ClockId,
    pub ticks_applied: i32,
}

impl ClockProgressEntry {
    pub fn new(clock_id: ClockId, ticks_applied: i32) -> Self {
        Self {
            clock_id,
            ticks_applied,
        }
    }
}

/// Gear obtained in a log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearAcquiredEntry {
    pub name: String,
    pub description: Option<String>,
    pub notes: Option<String>,
}

/// Reference to owned gear lost in a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearLostEntry {
    pub gear_id: GearId,
}

/// Reputation change toward one corporation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationChangeEntry {
    pub corporation_id: CorporationId,
    /// Positive or negative
    pub change_value: i32,
    pub notes: Option<String>,
}

/// A committed log entry.
///
/// Plain data with public fields. Constructors and [`LogEntry::apply_update`]
/// clamp `ll_clock_change` to `0..=max_ll_clock_change`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub pilot_id: PilotId,
    pub log_type: LogType,
    pub description: Option<String>,
    pub manna_change: i64,
    pub downtime_change: i64,
    /// LL clock ticks earned in this entry, within `0..=max`
    pub ll_clock_change: i32,
    pub clock_progress: Vec<ClockProgressEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(
        pilot_id: PilotId,
        log_type: LogType,
        ll_clock_change: i32,
        max_ll_clock_change: i32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: LogEntryId::new(),
            pilot_id,
            log_type,
            description: None,
            manna_change: 0,
            downtime_change: 0,
            ll_clock_change: clamp_ll_clock_change(ll_clock_change, max_ll_clock_change),
            clock_progress: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_resources(mut self, manna_change: i64, downtime_change: i64) -> Self {
        self.manna_change = manna_change;
        self.downtime_change = downtime_change;
        self
    }

    pub fn with_clock_progress(mut self, progress: Vec<ClockProgressEntry>) -> Self {
        self.clock_progress = progress;
        self
    }

    /// Ticks this entry applied to `clock_id`.
    pub fn ticks_for_clock(&self, clock_id: ClockId) -> i32 {
        self.clock_progress
            .iter()
            .filter(|p| p.clock_id == clock_id)
            .map(|p| p.ticks_applied)
            .sum()
    }

    /// Apply a partial edit. Clock progress, when present, replaces the
    /// existing list wholesale.
    pub fn apply_update(
        &mut self,
        update: LogEntryUpdate,
        max_ll_clock_change: i32,
        now: DateTime<Utc>,
    ) {
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(manna) = update.manna_change {
            self.manna_change = manna;
        }
        if let Some(downtime) = update.downtime_change {
            self.downtime_change = downtime;
        }
        if let Some(ticks) = update.ll_clock_change {
            self.ll_clock_change = clamp_ll_clock_change(ticks, max_ll_clock_change);
        }
        if let Some(progress) = update.clock_progress {
            self.clock_progress = progress;
        }
        self.updated_at = now;
    }
}

/// Input for recording a new log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntryDraft {
    pub log_type: LogType,
    pub description: Option<String>,
    #[serde(default)]
    pub manna_change: i64,
    #[serde(default)]
    pub downtime_change: i64,
    #[serde(default)]
    pub ll_clock_change: i32,
    #[serde(default)]
    pub clock_progress: Vec<ClockProgressEntry>,
    #[serde(default)]
    pub gear_acquired: Vec<GearAcquiredEntry>,
    #[serde(default)]
    pub gear_lost: Vec<GearLostEntry>,
    #[serde(default)]
    pub reputation_changes: Vec<ReputationChangeEntry>,
}

impl LogEntryDraft {
    pub fn new(log_type: LogType) -> Self {
        Self {
            log_type,
            description: None,
            manna_change: 0,
            downtime_change: 0,
            ll_clock_change: 0,
            clock_progress: Vec::new(),
            gear_acquired: Vec::new(),
            gear_lost: Vec::new(),
            reputation_changes: Vec::new(),
        }
    }

    /// Build the entry to persist. Gear and reputation lines are handled by
    /// the caller because they become separate records.
    pub fn to_entry(
        &self,
        pilot_id: PilotId,
        max_ll_clock_change: i32,
        now: DateTime<Utc>,
    ) -> LogEntry {
        let mut entry = LogEntry::new(
            pilot_id,
            self.log_type,
            self.ll_clock_change,
            max_ll_clock_change,
            now,
        )
        .with_resources(self.manna_change, self.downtime_change);
        entry.description = self.description.clone();
        entry
    }
}

/// Partial edit of a committed log entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntryUpdate {
    pub description: Option<String>,
    pub manna_change: Option<i64>,
    pub downtime_change: Option<i64>,
    pub ll_clock_change: Option<i32>,
    pub clock_progress: Option<Vec<ClockProgressEntry>>,
}

/// Clamp a requested LL delta into `0..=max`.
pub fn clamp_ll_clock_change(ticks: i32, max_ll_clock_change: i32) -> i32 {
    ticks.clamp(0, max_ll_clock_change.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ll_change_is_clamped_on_create() {
        let now = Utc::now();
        let pilot = PilotId::new();
        assert_eq!(LogEntry::new(pilot, LogType::Game, 40, 25, now).ll_clock_change, 25);
        assert_eq!(LogEntry::new(pilot, LogType::Game, -3, 25, now).ll_clock_change, 0);
        assert_eq!(LogEntry::new(pilot, LogType::Game, 4, 25, now).ll_clock_change, 4);
    }

    #[test]
    fn clamp_tolerates_negative_ceiling() {
        assert_eq!(clamp_ll_clock_change(5, -1), 0);
    }

    #[test]
    fn update_replaces_only_present_fields() {
        let now = Utc::now();
        let clock = ClockId::new();
        let mut entry = LogEntry::new(PilotId::new(), LogType::Trade, 2, 25, now)
            .with_description("Sold a Sunzi")
            .with_resources(400, -1)
            .with_clock_progress(vec![ClockProgressEntry::new(clock, 1)]);

        entry.apply_update(
            LogEntryUpdate {
                ll_clock_change: Some(99),
                clock_progress: Some(vec![]),
                ..LogEntryUpdate::default()
            },
            25,
            now,
        );

        assert_eq!(entry.ll_clock_change, 25);
        assert_eq!(entry.manna_change, 400);
        assert_eq!(entry.description.as_deref(), Some("Sold a Sunzi"));
        assert!(entry.clock_progress.is_empty());
    }

    #[test]
    fn ticks_for_clock_sums_matching_lines() {
        let a = ClockId::new();
        let b = ClockId::new();
        let entry = LogEntry::new(PilotId::new(), LogType::Game, 0, 25, Utc::now())
            .with_clock_progress(vec![
                ClockProgressEntry::new(a, 1),
                ClockProgressEntry::new(b, 2),
                ClockProgressEntry::new(a, -1),
            ]);
        assert_eq!(entry.ticks_for_clock(a), 0);
        assert_eq!(entry.ticks_for_clock(b), 2);
    }

    #[test]
    fn draft_deserializes_with_defaults() {
        let draft: LogEntryDraft =
            serde_json::from_str(r#"{"log_type":"game","description":null,"ll_clock_change":3}"#)
                .unwrap();
        assert_eq!(draft.log_type, LogType::Game);
        assert_eq!(draft.ll_clock_change, 3);
        assert!(draft.gear_acquired.is_empty());
    }

    #[test]
    fn log_type_round_trips_through_str() {
        assert_eq!("Trade".parse::<LogType>().unwrap(), LogType::Trade);
        assert_eq!(LogType::Game.to_string(), "game");
        assert!("raid".parse::<LogType>().is_err());
    }
}
