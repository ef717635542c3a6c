//! Delete clock use case.

use std::sync::Arc;

use lancerlog_domain::ClockId;

use crate::infrastructure::ports::ClockRepo;

use super::error::ClockError;

pub struct DeleteClock {
    clock_repo: Arc<dyn ClockRepo>,
}

impl DeleteClock {
    pub fn new(clock_repo: Arc<dyn ClockRepo>) -> Self {
        Self { clock_repo }
    }

    /// Remove a clock. Log entries that ticked it keep their progress lines;
    /// they simply no longer match any clock.
    pub async fn execute(&self, clock_id: ClockId) -> Result<(), ClockError> {
        self.clock_repo.delete(clock_id).await.map_err(|err| {
            if err.is_not_found() {
                ClockError::ClockNotFound(clock_id)
            } else {
                err.into()
            }
        })?;

        tracing::info!(clock_id = %clock_id, "Deleted clock");
        Ok(())
    }
}
