//! Personal objective clock.
//!
//! Unlike the LL clock, these are free-form: the player picks the segment
//! count and how many segments each tick fills. Progress comes from log
//! entries plus ticks applied by hand outside any log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::ClockName;
use lancerlog_domain::{ClockId, PilotId};

/// A segmented progress clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    pub id: ClockId,
    /// Owning pilot; GM clocks have none
    pub pilot_id: Option<PilotId>,
    pub name: ClockName,
    segments: i32,
    tick_amount: i32,
    /// Segments filled, always within `0..=segments`
    pub filled: i32,
    /// Ticks applied outside log entries (may be negative)
    pub manual_ticks: i32,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Clock {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `segments` or `tick_amount` is
    /// below 1.
    pub fn new(
        pilot_id: Option<PilotId>,
        name: ClockName,
        segments: i32,
        tick_amount: i32,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_shape(segments, tick_amount)?;
        Ok(Self {
            id: ClockId::new(),
            pilot_id,
            name,
            segments,
            tick_amount,
            filled: 0,
            manual_ticks: 0,
            is_completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn segments(&self) -> i32 {
        self.segments
    }

    pub fn tick_amount(&self) -> i32 {
        self.tick_amount
    }

    pub fn belongs_to(&self, pilot_id: PilotId) -> bool {
        self.pilot_id == Some(pilot_id)
    }

    /// Change segment count and/or tick amount. Callers recalculate after.
    pub fn reshape(
        &mut self,
        segments: Option<i32>,
        tick_amount: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let segments = segments.unwrap_or(self.segments);
        let tick_amount = tick_amount.unwrap_or(self.tick_amount);
        validate_shape(segments, tick_amount)?;
        self.segments = segments;
        self.tick_amount = tick_amount;
        self.updated_at = now;
        Ok(())
    }

    /// Record ticks applied by hand.
    pub fn tick(&mut self, ticks: i32, now: DateTime<Utc>) {
        self.manual_ticks = self.manual_ticks.saturating_add(ticks);
        self.updated_at = now;
    }

    /// Recompute `filled` from the ticks logged against this clock.
    pub fn recalculate(&mut self, log_ticks: i32, now: DateTime<Utc>) {
        let total = log_ticks.saturating_add(self.manual_ticks);
        self.filled = total
            .saturating_mul(self.tick_amount)
            .clamp(0, self.segments);
        self.is_completed = self.filled >= self.segments;
        self.updated_at = now;
    }

    pub fn remaining(&self) -> i32 {
        self.segments - self.filled
    }
}

fn validate_shape(segments: i32, tick_amount: i32) -> Result<(), DomainError> {
    if segments < 1 {
        return Err(DomainError::validation("Clock needs at least one segment"));
    }
    if tick_amount < 1 {
        return Err(DomainError::validation("Clock tick amount must be at least 1"));
    }
    Ok(())
}
