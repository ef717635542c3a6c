//! Log listing use cases.
//!
//! The pilot view shows a pilot's whole history; the GM view pages over every
//! pilot's logs with optional filters.

use std::sync::Arc;

use lancerlog_domain::{LogEntry, LogFilter, PilotId};

use crate::infrastructure::ports::{LogEntryRepo, PilotRepo};

use super::error::LogEntryError;

pub struct ListLogs {
    pilot_repo: Arc<dyn PilotRepo>,
    log_repo: Arc<dyn LogEntryRepo>,
    default_limit: u32,
}

impl ListLogs {
    pub fn new(
        pilot_repo: Arc<dyn PilotRepo>,
        log_repo: Arc<dyn LogEntryRepo>,
        default_limit: u32,
    ) -> Self {
        Self {
            pilot_repo,
            log_repo,
            default_limit,
        }
    }

    /// A filter carrying the configured page size.
    pub fn default_filter(&self) -> LogFilter {
        LogFilter::with_limit(self.default_limit)
    }

    /// Newest-first history of one pilot.
    pub async fn for_pilot(&self, pilot_id: PilotId) -> Result<Vec<LogEntry>, LogEntryError> {
        self.pilot_repo
            .get(pilot_id)
            .await?
            .ok_or(LogEntryError::PilotNotFound(pilot_id))?;
        Ok(self.log_repo.list_for_pilot(pilot_id).await?)
    }

    /// One page of the GM log listing.
    pub async fn execute(&self, filter: &LogFilter) -> Result<Vec<LogEntry>, LogEntryError> {
        let logs = self.log_repo.list_all().await?;
        let page = filter.apply(logs);
        tracing::debug!(
            pilot_id = ?filter.pilot_id,
            log_type = ?filter.log_type,
            direction = ?filter.resource_direction,
            limit = filter.page_limit(),
            offset = filter.offset,
            returned = page.len(),
            "Listed logs"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockLogEntryRepo, MockPilotRepo};
    use chrono::{Duration, TimeZone, Utc};
    use lancerlog_domain::{LogType, ResourceDirection};

    fn history(pilot_id: PilotId) -> Vec<LogEntry> {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        (0..6)
            .map(|i| {
                let log_type = if i % 2 == 0 { LogType::Game } else { LogType::Trade };
                let manna = if i % 3 == 0 { -10 } else { 20 };
                LogEntry::new(pilot_id, log_type, 1, 25, start - Duration::days(i))
                    .with_resources(manna, 0)
            })
            .collect()
    }

    fn use_case(logs: Vec<LogEntry>, default_limit: u32) -> ListLogs {
        let mut log_repo = MockLogEntryRepo::new();
        log_repo
            .expect_list_all()
            .returning(move || Ok(logs.clone()));
        ListLogs::new(Arc::new(MockPilotRepo::new()), Arc::new(log_repo), default_limit)
    }

    #[tokio::test]
    async fn default_filter_uses_configured_limit() {
        let pilot_id = PilotId::new();
        let list = use_case(history(pilot_id), 4);

        let page = list.execute(&list.default_filter()).await.unwrap();
        assert_eq!(page.len(), 4);
    }

    #[tokio::test]
    async fn filters_by_type_and_direction_then_pages() {
        let pilot_id = PilotId::new();
        let logs = history(pilot_id);
        let list = use_case(logs.clone(), 50);

        let trades = list
            .execute(&LogFilter::default().of_type(LogType::Trade))
            .await
            .unwrap();
        assert_eq!(trades.len(), 3);

        let spending = list
            .execute(&LogFilter::default().direction(ResourceDirection::Decrease))
            .await
            .unwrap();
        assert_eq!(
            spending.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![logs[0].id, logs[3].id]
        );

        let second_page = list
            .execute(&LogFilter::default().limit(2).offset(2))
            .await
            .unwrap();
        assert_eq!(
            second_page.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![logs[2].id, logs[3].id]
        );
    }

    #[tokio::test]
    async fn for_pilot_requires_pilot() {
        let mut pilot_repo = MockPilotRepo::new();
        pilot_repo.expect_get().returning(|_| Ok(None));
        let list = ListLogs::new(Arc::new(pilot_repo), Arc::new(MockLogEntryRepo::new()), 50);

        let result = list.for_pilot(PilotId::new()).await;
        assert!(matches!(result, Err(LogEntryError::PilotNotFound(_))));
    }
}
