//! Manual clock tick use case.

use std::sync::Arc;

use lancerlog_domain::{Clock, ClockId};

use crate::infrastructure::ports::{ClockPort, ClockRepo, LogEntryRepo};

use super::error::ClockError;

pub struct TickClock {
    clock_repo: Arc<dyn ClockRepo>,
    log_repo: Arc<dyn LogEntryRepo>,
    clock: Arc<dyn ClockPort>,
}

impl TickClock {
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

    /// Add (or with a negative value, remove) manual ticks, then refill the
    /// clock from manual plus logged ticks.
    pub async fn execute(&self, clock_id: ClockId, ticks: i32) -> Result<Clock, ClockError> {
        let mut clock = self
            .clock_repo
            .get(clock_id)
            .await?
            .ok_or(ClockError::ClockNotFound(clock_id))?;

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

        let now = self.clock.now();
        let was_completed = clock.is_completed;
        clock.tick(ticks, now);
        clock.recalculate(log_ticks, now);
        self.clock_repo.save(&clock).await?;

        if clock.is_completed && !was_completed {
            tracing::info!(clock_id = %clock_id, name = %clock.name, "Clock completed");
        }
        tracing::debug!(
            clock_id = %clock_id,
            ticks,
            filled = clock.filled,
            remaining = clock.remaining(),
            "Ticked clock"
        );

        Ok(clock)
    }
}
