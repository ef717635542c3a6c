//! Delete pilot use case.

use std::sync::Arc;

use lancerlog_domain::{PilotId, UserId};

use crate::infrastructure::ports::PilotRepo;

use super::error::PilotError;

pub struct DeletePilot {
    pilot_repo: Arc<dyn PilotRepo>,
}

impl DeletePilot {
    pub fn new(pilot_repo: Arc<dyn PilotRepo>) -> Self {
        Self { pilot_repo }
    }

    /// Delete a pilot owned by `user_id`, along with its logs, clocks, gear
    /// and reputation history.
    pub async fn execute(&self, user_id: UserId, pilot_id: PilotId) -> Result<(), PilotError> {
        self.pilot_repo
            .get(pilot_id)
            .await?
            .filter(|pilot| pilot.user_id() == user_id)
            .ok_or(PilotError::PilotNotFound(pilot_id))?;

        self.pilot_repo.delete(pilot_id).await?;

        tracing::info!(pilot_id = %pilot_id, user_id = %user_id, "Deleted pilot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockPilotRepo;
    use crate::test_fixtures::{test_pilot, TestWorld};
    use lancerlog_domain::{LogEntryDraft, LogType};

    #[tokio::test]
    async fn removes_pilot_and_its_history() {
        let world = TestWorld::new();
        let pilot = world.pilot("Ace").await;
        let clock = world.clock(pilot.id(), 4).await;
        world
            .app
            .use_cases
            .logs
            .record
            .execute(pilot.id(), LogEntryDraft::new(LogType::Game))
            .await
            .unwrap();

        world
            .app
            .use_cases
            .pilots
            .delete
            .execute(world.user_id, pilot.id())
            .await
            .unwrap();

        let repos = &world.app.repositories;
        assert!(repos.pilots.get(pilot.id()).await.unwrap().is_none());
        assert!(repos.logs.list_for_pilot(pilot.id()).await.unwrap().is_empty());
        assert!(repos.clocks.get(clock.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn another_users_pilot_is_left_alone() {
        let pilot = test_pilot();
        let pilot_id = pilot.id();

        let mut pilot_repo = MockPilotRepo::new();
        pilot_repo
            .expect_get()
            .returning(move |_| Ok(Some(pilot.clone())));
        pilot_repo.expect_delete().never();

        let use_case = DeletePilot::new(Arc::new(pilot_repo));
        let result = use_case.execute(UserId::new(), pilot_id).await;
        assert!(matches!(result, Err(PilotError::PilotNotFound(_))));
    }
}
