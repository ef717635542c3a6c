//! Delete log entry use case.

use std::sync::Arc;

use lancerlog_domain::{LogEntryId, Pilot};

use crate::infrastructure::ports::{GearRepo, LogEntryRepo, ReputationRepo};
use crate::use_cases::pilots::RecalculatePilot;

use super::error::LogEntryError;

pub struct DeleteLogEntry {
    log_repo: Arc<dyn LogEntryRepo>,
    gear_repo: Arc<dyn GearRepo>,
    reputation_repo: Arc<dyn ReputationRepo>,
    recalculate: Arc<RecalculatePilot>,
}

impl DeleteLogEntry {
    pub fn new(
        log_repo: Arc<dyn LogEntryRepo>,
        gear_repo: Arc<dyn GearRepo>,
        reputation_repo: Arc<dyn ReputationRepo>,
        recalculate: Arc<RecalculatePilot>,
    ) -> Self {
        Self {
            log_repo,
            gear_repo,
            reputation_repo,
            recalculate,
        }
    }

    /// Remove a log entry, its reputation changes and the gear losses it
    /// recorded, then recalculate the pilot.
    ///
    /// Gear acquired in the entry is kept.
    ///
    /// # Returns
    /// * `Ok(Pilot)` - The pilot after recalculation
    pub async fn execute(&self, log_id: LogEntryId) -> Result<Pilot, LogEntryError> {
        let entry = self
            .log_repo
            .get(log_id)
            .await?
            .ok_or(LogEntryError::LogNotFound(log_id))?;

        self.log_repo.delete(log_id).await?;
        self.reputation_repo.delete_for_log(log_id).await?;

        for mut gear in self.gear_repo.list_lost_in(log_id).await? {
            if gear.restore_if_lost_in(log_id) {
                self.gear_repo.save(&gear).await?;
            }
        }

        let pilot = self.recalculate.execute(entry.pilot_id).await?;

        tracing::info!(
            log_id = %log_id,
            pilot_id = %entry.pilot_id,
            license_level = pilot.license_level(),
            "Deleted log entry"
        );

        Ok(pilot)
    }
}
