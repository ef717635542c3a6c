//! Record log entry use case.
//!
//! Commits a session or trade for a pilot: the entry itself, the personal
//! clock ticks it carries, gear gained and lost, and reputation changes.
//! Finishes by recalculating the pilot from its full history.

use std::sync::Arc;

use lancerlog_domain::{
    ExoticGear, GearName, LogEntry, LogEntryDraft, LogEntryId, PilotId, ReputationChange,
};

use crate::infrastructure::ports::{
    ClockPort, ClockRepo, CorporationRepo, GearRepo, LogEntryRepo, PilotRepo, ReputationRepo,
};
use crate::use_cases::pilots::RecalculatePilot;

use super::error::LogEntryError;
use super::owned_clock_progress;

pub struct RecordLogEntry {
    pilot_repo: Arc<dyn PilotRepo>,
    log_repo: Arc<dyn LogEntryRepo>,
    clock_repo: Arc<dyn ClockRepo>,
    gear_repo: Arc<dyn GearRepo>,
    corporation_repo: Arc<dyn CorporationRepo>,
    reputation_repo: Arc<dyn ReputationRepo>,
    recalculate: Arc<RecalculatePilot>,
    clock: Arc<dyn ClockPort>,
    max_ll_clock_change: i32,
}

impl RecordLogEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pilot_repo: Arc<dyn PilotRepo>,
        log_repo: Arc<dyn LogEntryRepo>,
        clock_repo: Arc<dyn ClockRepo>,
        gear_repo: Arc<dyn GearRepo>,
        corporation_repo: Arc<dyn CorporationRepo>,
        reputation_repo: Arc<dyn ReputationRepo>,
        recalculate: Arc<RecalculatePilot>,
        clock: Arc<dyn ClockPort>,
        max_ll_clock_change: i32,
    ) -> Self {
        Self {
            pilot_repo,
            log_repo,
            clock_repo,
            gear_repo,
            corporation_repo,
            reputation_repo,
            recalculate,
            clock,
            max_ll_clock_change,
        }
    }

    /// Execute the record log entry use case.
    ///
    /// Clock ticks against clocks the pilot does not own, gear the pilot
    /// does not hold, and unknown corporations are skipped with a warning.
    ///
    /// # Returns
    /// * `Ok(LogEntry)` - The committed entry (LL delta already clamped)
    /// * `Err(LogEntryError)` - Pilot missing, invalid gear name, or storage failure
    pub async fn execute(
        &self,
        pilot_id: PilotId,
        draft: LogEntryDraft,
    ) -> Result<LogEntry, LogEntryError> {
        self.pilot_repo
            .get(pilot_id)
            .await?
            .ok_or(LogEntryError::PilotNotFound(pilot_id))?;

        let now = self.clock.now();
        let mut entry = draft.to_entry(pilot_id, self.max_ll_clock_change, now);
        entry.clock_progress =
            owned_clock_progress(self.clock_repo.as_ref(), pilot_id, draft.clock_progress).await?;

        // Validate gear names before anything is written.
        let acquired = draft
            .gear_acquired
            .into_iter()
            .map(|gear| {
                Ok(ExoticGear::new(pilot_id, GearName::new(gear.name)?, now)
                    .with_description(gear.description)
                    .with_notes(gear.notes)
                    .acquired_in(entry.id))
            })
            .collect::<Result<Vec<_>, LogEntryError>>()?;

        self.log_repo.save(&entry).await?;

        for gear in &acquired {
            self.gear_repo.save(gear).await?;
        }
        self.mark_gear_lost(pilot_id, entry.id, &draft.gear_lost).await?;
        self.record_reputation(pilot_id, entry.id, draft.reputation_changes)
            .await?;

        let pilot = self.recalculate.execute(pilot_id).await?;

        tracing::info!(
            pilot_id = %pilot_id,
            log_id = %entry.id,
            log_type = %entry.log_type,
            ll_clock_change = entry.ll_clock_change,
            license_level = pilot.license_level(),
            "Recorded log entry"
        );

        Ok(entry)
    }

    async fn mark_gear_lost(
        &self,
        pilot_id: PilotId,
        log_id: LogEntryId,
        lost: &[lancerlog_domain::GearLostEntry],
    ) -> Result<(), LogEntryError> {
        for line in lost {
            let Some(mut gear) = self.gear_repo.get(line.gear_id).await? else {
                tracing::warn!(gear_id = %line.gear_id, "Skipping loss of unknown gear");
                continue;
            };
            if gear.pilot_id != pilot_id {
                tracing::warn!(gear_id = %gear.id, pilot_id = %pilot_id, "Skipping loss of gear owned by another pilot");
                continue;
            }
            if let Err(e) = gear.mark_lost(log_id) {
                tracing::warn!(gear_id = %gear.id, error = %e, "Skipping loss of gear");
                continue;
            }
            self.gear_repo.save(&gear).await?;
        }
        Ok(())
    }

    async fn record_reputation(
        &self,
        pilot_id: PilotId,
        log_id: LogEntryId,
        changes: Vec<lancerlog_domain::ReputationChangeEntry>,
    ) -> Result<(), LogEntryError> {
        for line in changes {
            if self.corporation_repo.get(line.corporation_id).await?.is_none() {
                tracing::warn!(corporation_id = %line.corporation_id, "Skipping reputation change for unknown corporation");
                continue;
            }
            let change =
                ReputationChange::new(log_id, pilot_id, line.corporation_id, line.change_value)
                    .with_notes(line.notes);
            self.reputation_repo.save_change(&change).await?;
        }
        Ok(())
    }
}
