//! Create personal clock use case.

use std::sync::Arc;

use lancerlog_domain::{Clock, ClockName, PilotId};

use crate::infrastructure::ports::{ClockPort, ClockRepo, PilotRepo};

use super::error::ClockError;

pub struct CreateClock {
    pilot_repo: Arc<dyn PilotRepo>,
    clock_repo: Arc<dyn ClockRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CreateClock {
    pub fn new(
        pilot_repo: Arc<dyn PilotRepo>,
        clock_repo: Arc<dyn ClockRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            pilot_repo,
            clock_repo,
            clock,
        }
    }

    /// Create an empty clock. Pass `None` for a GM clock with no owner.
    pub async fn execute(
        &self,
        pilot_id: Option<PilotId>,
        name: String,
        segments: i32,
        tick_amount: i32,
    ) -> Result<Clock, ClockError> {
        if let Some(pilot_id) = pilot_id {
            self.pilot_repo
                .get(pilot_id)
                .await?
                .ok_or(ClockError::PilotNotFound(pilot_id))?;
        }

        let name = ClockName::new(name)?;
        let clock = Clock::new(pilot_id, name, segments, tick_amount, self.clock.now())?;
        self.clock_repo.save(&clock).await?;

        tracing::info!(
            clock_id = %clock.id,
            pilot_id = ?pilot_id,
            segments,
            tick_amount,
            "Created clock"
        );

        Ok(clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockClockRepo, MockPilotRepo};
    use crate::test_fixtures::{fixed_clock, test_pilot};

    #[tokio::test]
    async fn creates_clock_for_existing_pilot() {
        let pilot = test_pilot();
        let pilot_id = pilot.id();

        let mut pilot_repo = MockPilotRepo::new();
        pilot_repo
            .expect_get()
            .returning(move |_| Ok(Some(pilot.clone())));
        let mut clock_repo = MockClockRepo::new();
        clock_repo
            .expect_save()
            .withf(move |c| c.belongs_to(pilot_id) && c.segments() == 6 && c.filled == 0)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateClock::new(Arc::new(pilot_repo), Arc::new(clock_repo), fixed_clock());
        let clock = use_case
            .execute(Some(pilot_id), "  Find the Defector ".to_string(), 6, 1)
            .await
            .unwrap();
        assert_eq!(clock.name.as_str(), "Find the Defector");
    }

    #[tokio::test]
    async fn rejects_zero_segments() {
        let use_case = CreateClock::new(
            Arc::new(MockPilotRepo::new()),
            Arc::new(MockClockRepo::new()),
            fixed_clock(),
        );
        let result = use_case
            .execute(None, "Doomsday".to_string(), 0, 1)
            .await;
        assert!(matches!(result, Err(ClockError::Validation(_))));
    }

    #[tokio::test]
    async fn when_pilot_missing_returns_not_found() {
        let mut pilot_repo = MockPilotRepo::new();
        pilot_repo.expect_get().returning(|_| Ok(None));
        let use_case = CreateClock::new(
            Arc::new(pilot_repo),
            Arc::new(MockClockRepo::new()),
            fixed_clock(),
        );
        let result = use_case
            .execute(Some(PilotId::new()), "Doomsday".to_string(), 4, 1)
            .await;
        assert!(matches!(result, Err(ClockError::PilotNotFound(_))));
    }
}
