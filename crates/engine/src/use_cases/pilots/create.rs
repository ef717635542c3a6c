//! Create pilot use case.

use std::sync::Arc;

use lancerlog_domain::{Pilot, PilotName, UserId};

use crate::infrastructure::ports::{ClockPort, PilotRepo};

use super::error::PilotError;

/// Input for a new pilot's profile.
#[derive(Debug, Clone, Default)]
pub struct CreatePilotInput {
    pub name: String,
    pub callsign: Option<String>,
    pub background: Option<String>,
    pub notes: Option<String>,
}

pub struct CreatePilot {
    pilot_repo: Arc<dyn PilotRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CreatePilot {
    pub fn new(pilot_repo: Arc<dyn PilotRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { pilot_repo, clock }
    }

    /// New pilots start with an empty log history: LL 0, no resources.
    pub async fn execute(&self, user_id: UserId, input: CreatePilotInput) -> Result<Pilot, PilotError> {
        let name = PilotName::new(input.name)?;
        let mut pilot = Pilot::new(user_id, name, self.clock.now());
        if let Some(callsign) = input.callsign {
            pilot = pilot.with_callsign(callsign);
        }
        if let Some(background) = input.background {
            pilot = pilot.with_background(background);
        }
        if let Some(notes) = input.notes {
            pilot = pilot.with_notes(notes);
        }

        self.pilot_repo.save(&pilot).await?;
        tracing::info!(pilot_id = %pilot.id(), user_id = %user_id, "Created pilot");
        Ok(pilot)
    }
}
