//! Recalculate pilot use case.
//!
//! Rebuilds a pilot's resources, License Level and personal clocks from the
//! full log history. Every log mutation ends here, so the stored pilot is
//! always the fold of its logs.

use std::sync::Arc;

use lancerlog_domain::{LogEntry, Pilot, PilotId, ResourceTotals};

use crate::infrastructure::ports::{ClockPort, ClockRepo, LogEntryRepo, PilotRepo};

use super::error::PilotError;

pub struct RecalculatePilot {
    pilot_repo: Arc<dyn PilotRepo>,
    log_repo: Arc<dyn LogEntryRepo>,
    clock_repo: Arc<dyn ClockRepo>,
    clock: Arc<dyn ClockPort>,
}

impl RecalculatePilot {
    pub fn new(
        pilot_repo: Arc<dyn PilotRepo>,
        log_repo: Arc<dyn LogEntryRepo>,
        clock_repo: Arc<dyn ClockRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            pilot_repo,
            log_repo,
            clock_repo,
            clock,
        }
    }

    /// # Returns
    /// * `Ok(Pilot)` - The pilot as saved after recalculation
    /// * `Err(PilotError::PilotNotFound)` - No such pilot
    pub async fn execute(&self, pilot_id: PilotId) -> Result<Pilot, PilotError> {
        let mut pilot = self
            .pilot_repo
            .get(pilot_id)
            .await?
            .ok_or(PilotError::PilotNotFound(pilot_id))?;

        let logs = self.log_repo.list_for_pilot(pilot_id).await?;
        let totals = ResourceTotals::from_logs(&logs);
        let now = self.clock.now();

        let previous_level = pilot.license_level();
        if pilot.apply_totals(&totals, now) {
            tracing::info!(
                pilot_id = %pilot_id,
                from = previous_level,
                to = totals.license_level,
                "Pilot license level changed"
            );
        }
        self.pilot_repo.save(&pilot).await?;

        let clocks_updated = self.recalculate_clocks(pilot_id, &logs).await?;

        tracing::debug!(
            pilot_id = %pilot_id,
            logs = logs.len(),
            ll_ticks = totals.ll_ticks,
            manna = totals.manna,
            downtime = totals.downtime,
            clocks_updated,
            "Recalculated pilot from log history"
        );

        Ok(pilot)
    }

    async fn recalculate_clocks(
        &self,
        pilot_id: PilotId,
        logs: &[LogEntry],
    ) -> Result<usize, PilotError> {
        let clocks = self.clock_repo.list_for_pilot(pilot_id).await?;
        let now = self.clock.now();
        let count = clocks.len();

        for mut clock in clocks {
            let log_ticks: i32 = logs.iter().map(|log| log.ticks_for_clock(clock.id)).sum();
            clock.recalculate(log_ticks, now);
            self.clock_repo.save(&clock).await?;
        }

        Ok(count)
    }
}
