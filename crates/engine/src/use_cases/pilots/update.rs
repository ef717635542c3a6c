//! Update pilot profile use case.

use std::sync::Arc;

use lancerlog_domain::{Pilot, PilotId, PilotName, PilotProfileUpdate, UserId};

use crate::infrastructure::ports::{ClockPort, PilotRepo};

use super::error::PilotError;

/// Profile fields to change. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePilotInput {
    pub name: Option<String>,
    pub callsign: Option<String>,
    pub background: Option<String>,
    pub notes: Option<String>,
}

pub struct UpdatePilot {
    pilot_repo: Arc<dyn PilotRepo>,
    clock: Arc<dyn ClockPort>,
}

impl UpdatePilot {
    pub fn new(pilot_repo: Arc<dyn PilotRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { pilot_repo, clock }
    }

    /// Edit the profile of a pilot owned by `user_id`.
    ///
    /// A pilot owned by someone else is reported as not found. Derived
    /// fields (License Level, resources) are never touched here.
    pub async fn execute(
        &self,
        user_id: UserId,
        pilot_id: PilotId,
        input: UpdatePilotInput,
    ) -> Result<Pilot, PilotError> {
        let mut pilot = self
            .pilot_repo
            .get(pilot_id)
            .await?
            .filter(|pilot| pilot.user_id() == user_id)
            .ok_or(PilotError::PilotNotFound(pilot_id))?;

        let update = PilotProfileUpdate {
            name: input.name.map(PilotName::new).transpose()?,
            callsign: input.callsign,
            background: input.background,
            notes: input.notes,
        };
        if update == PilotProfileUpdate::default() {
            return Ok(pilot);
        }

        pilot.update_profile(update, self.clock.now());
        self.pilot_repo.save(&pilot).await?;

        tracing::info!(pilot_id = %pilot_id, "Updated pilot profile");
        Ok(pilot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::TestWorld;
    use lancerlog_domain::{LevelProgress, LogEntryDraft, LogType};

    #[tokio::test]
    async fn edits_profile_and_keeps_derived_fields() {
        let world = TestWorld::new();
        let pilot = world.pilot("Ace").await;
        let mut draft = LogEntryDraft::new(LogType::Game);
        draft.ll_clock_change = 4;
        draft.manna_change = 120;
        world
            .app
            .use_cases
            .logs
            .record
            .execute(pilot.id(), draft)
            .await
            .unwrap();

        let updated = world
            .app
            .use_cases
            .pilots
            .update
            .execute(
                world.user_id,
                pilot.id(),
                UpdatePilotInput {
                    name: Some(" Maverick ".to_string()),
                    callsign: Some("Mav".to_string()),
                    ..UpdatePilotInput::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name().as_str(), "Maverick");
        assert_eq!(updated.callsign(), Some("Mav"));

        let stored = world.reload(pilot.id()).await;
        assert_eq!(stored.name().as_str(), "Maverick");
        assert_eq!(stored.level_progress(), LevelProgress::new(1, 1));
        assert_eq!(stored.manna(), 120);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let world = TestWorld::new();
        let pilot = world.pilot("Ace").await;

        let result = world
            .app
            .use_cases
            .pilots
            .update
            .execute(
                world.user_id,
                pilot.id(),
                UpdatePilotInput {
                    name: Some("  ".to_string()),
                    ..UpdatePilotInput::default()
                },
            )
            .await;
        assert!(matches!(result, Err(PilotError::Validation(_))));
        assert_eq!(world.reload(pilot.id()).await.name().as_str(), "Ace");
    }

    #[tokio::test]
    async fn another_users_pilot_is_not_found() {
        let world = TestWorld::new();
        let pilot = world.pilot("Ace").await;

        let result = world
            .app
            .use_cases
            .pilots
            .update
            .execute(
                UserId::new(),
                pilot.id(),
                UpdatePilotInput {
                    notes: Some("hijacked".to_string()),
                    ..UpdatePilotInput::default()
                },
            )
            .await;
        assert!(matches!(result, Err(PilotError::PilotNotFound(id)) if id == pilot.id()));
        assert_eq!(world.reload(pilot.id()).await.notes(), None);
    }
}
