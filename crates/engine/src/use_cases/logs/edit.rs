//! Edit log entry use case.

use std::sync::Arc;

use lancerlog_domain::{LogEntry, LogEntryId, LogEntryUpdate};

use crate::infrastructure::ports::{ClockPort, ClockRepo, LogEntryRepo};
use crate::use_cases::pilots::RecalculatePilot;

use super::error::LogEntryError;
use super::owned_clock_progress;

pub struct EditLogEntry {
    log_repo: Arc<dyn LogEntryRepo>,
    clock_repo: Arc<dyn ClockRepo>,
    recalculate: Arc<RecalculatePilot>,
    clock: Arc<dyn ClockPort>,
    max_ll_clock_change: i32,
}

impl EditLogEntry {
    pub fn new(
        log_repo: Arc<dyn LogEntryRepo>,
        clock_repo: Arc<dyn ClockRepo>,
        recalculate: Arc<RecalculatePilot>,
        clock: Arc<dyn ClockPort>,
        max_ll_clock_change: i32,
    ) -> Self {
        Self {
            log_repo,
            clock_repo,
            recalculate,
            clock,
            max_ll_clock_change,
        }
    }

    /// Apply a partial edit and recalculate the owning pilot.
    ///
    /// A present `clock_progress` replaces the entry's ticks wholesale, after
    /// dropping lines for clocks the pilot does not own.
    pub async fn execute(
        &self,
        log_id: LogEntryId,
        mut update: LogEntryUpdate,
    ) -> Result<LogEntry, LogEntryError> {
        let mut entry = self
            .log_repo
            .get(log_id)
            .await?
            .ok_or(LogEntryError::LogNotFound(log_id))?;

        if let Some(progress) = update.clock_progress.take() {
            update.clock_progress = Some(
                owned_clock_progress(self.clock_repo.as_ref(), entry.pilot_id, progress).await?,
            );
        }

        let previous_ticks = entry.ll_clock_change;
        entry.apply_update(update, self.max_ll_clock_change, self.clock.now());
        self.log_repo.save(&entry).await?;

        let pilot = self.recalculate.execute(entry.pilot_id).await?;

        tracing::info!(
            log_id = %log_id,
            pilot_id = %entry.pilot_id,
            previous_ll_clock_change = previous_ticks,
            ll_clock_change = entry.ll_clock_change,
            license_level = pilot.license_level(),
            "Edited log entry"
        );

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockClockRepo, MockLogEntryRepo, MockPilotRepo};
    use crate::test_fixtures::{fixed_clock, TestWorld};
    use lancerlog_domain::{ClockProgressEntry, LevelProgress, LogEntryDraft, LogType};

    #[tokio::test]
    async fn when_log_missing_returns_not_found() {
        let mut log_repo = MockLogEntryRepo::new();
        log_repo.expect_get().returning(|_| Ok(None));
        let log_repo: Arc<dyn LogEntryRepo> = Arc::new(log_repo);
        let clock_repo: Arc<dyn ClockRepo> = Arc::new(MockClockRepo::new());
        let recalculate = Arc::new(RecalculatePilot::new(
            Arc::new(MockPilotRepo::new()),
            log_repo.clone(),
            clock_repo.clone(),
            fixed_clock(),
        ));

        let use_case = EditLogEntry::new(log_repo, clock_repo, recalculate, fixed_clock(), 25);
        let result = use_case
            .execute(LogEntryId::new(), LogEntryUpdate::default())
            .await;
        assert!(matches!(result, Err(LogEntryError::LogNotFound(_))));
    }

    #[tokio::test]
    async fn lowering_ticks_can_undo_a_level_up() {
        let world = TestWorld::new();
        let pilot = world.pilot("Ace").await;
        let logs = &world.app.use_cases.logs;

        let mut first = LogEntryDraft::new(LogType::Game);
        first.ll_clock_change = 2;
        logs.record.execute(pilot.id(), first).await.unwrap();

        let mut second = LogEntryDraft::new(LogType::Game);
        second.ll_clock_change = 2;
        let second = logs.record.execute(pilot.id(), second).await.unwrap();
        assert_eq!(world.reload(pilot.id()).await.level_progress(), LevelProgress::new(1, 1));

        logs.edit
            .execute(
                second.id,
                LogEntryUpdate {
                    ll_clock_change: Some(0),
                    description: Some("Mission scrubbed".to_string()),
                    ..LogEntryUpdate::default()
                },
            )
            .await
            .unwrap();

        let stored = world.reload(pilot.id()).await;
        assert_eq!(stored.level_progress(), LevelProgress::new(0, 2));
    }

    #[tokio::test]
    async fn replacing_clock_progress_recomputes_clocks() {
        let world = TestWorld::new();
        let pilot = world.pilot("Ace").await;
        let first_clock = world.clock(pilot.id(), 6).await;
        let second_clock = world.clock(pilot.id(), 6).await;
        let logs = &world.app.use_cases.logs;

        let mut draft = LogEntryDraft::new(LogType::Game);
        draft.clock_progress = vec![ClockProgressEntry::new(first_clock.id, 3)];
        let entry = logs.record.execute(pilot.id(), draft).await.unwrap();

        let edited = logs
            .edit
            .execute(
                entry.id,
                LogEntryUpdate {
                    clock_progress: Some(vec![ClockProgressEntry::new(second_clock.id, 1)]),
                    ..LogEntryUpdate::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(edited.clock_progress.len(), 1);
        assert_eq!(world.reload_clock(first_clock.id).await.filled, 0);
        assert_eq!(world.reload_clock(second_clock.id).await.filled, 1);
    }
}
