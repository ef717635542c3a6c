//! Edit clock use case.

use std::sync::Arc;

use lancerlog_domain::{Clock, ClockId, ClockName};

use crate::infrastructure::ports::{ClockPort, ClockRepo, LogEntryRepo};

use super::error::ClockError;

/// Clock fields to change. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateClockInput {
    pub name: Option<String>,
    pub segments: Option<i32>,
    pub tick_amount: Option<i32>,
}

pub struct UpdateClock {
    clock_repo: Arc<dyn ClockRepo>,
    log_repo: Arc<dyn LogEntryRepo>,
    clock: Arc<dyn ClockPort>,
}

impl UpdateClock {
    pub fn new(
        clock_repo: Arc<dyn ClockRepo>,
        log_repo: Arc<dyn LogEntryRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            clock_repo,
            log_repo,
            clock,
        }
    }

    /// Rename or reshape a clock, then refill it under the new shape.
    pub async fn execute(&self, clock_id: ClockId, input: UpdateClockInput) -> Result<Clock, ClockError> {
        let mut clock = self
            .clock_repo
            .get(clock_id)
            .await?
            .ok_or(ClockError::ClockNotFound(clock_id))?;

        let name = input.name.map(ClockName::new).transpose()?;
        let now = self.clock.now();
        clock.reshape(input.segments, input.tick_amount, now)?;
        if let Some(name) = name {
            clock.name = name;
        }

        let log_ticks = match clock.pilot_id {
            Some(pilot_id) => self
                .log_repo
                .list_for_pilot(pilot_id)
                .await?
                .iter()
                .map(|log| log.ticks_for_clock(clock_id))
                .sum(),
            None => 0,
        };
        clock.recalculate(log_ticks, now);
        self.clock_repo.save(&clock).await?;

        tracing::info!(
            clock_id = %clock_id,
            segments = clock.segments(),
            tick_amount = clock.tick_amount(),
            filled = clock.filled,
            "Updated clock"
        );
        Ok(clock)
    }
}
