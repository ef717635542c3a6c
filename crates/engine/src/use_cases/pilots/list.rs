//! Pilot listing use cases.
//!
//! Players see their own roster; the GM sees every pilot.

use std::sync::Arc;

use serde::Serialize;

use lancerlog_domain::{Pilot, UserId};

use crate::infrastructure::ports::PilotRepo;

use super::error::PilotError;

/// A roster row: the pilot plus what a list view derives from it.
#[derive(Debug, Clone, Serialize)]
pub struct PilotSummary {
    pub pilot: Pilot,
    pub ll_clock_segments: i32,
    /// At the terminal License Level; no clock to show
    pub maxed: bool,
}

impl From<Pilot> for PilotSummary {
    fn from(pilot: Pilot) -> Self {
        Self {
            ll_clock_segments: pilot.ll_clock_segments(),
            maxed: pilot.level_progress().is_maxed(),
            pilot,
        }
    }
}

pub struct ListPilots {
    pilot_repo: Arc<dyn PilotRepo>,
}

impl ListPilots {
    pub fn new(pilot_repo: Arc<dyn PilotRepo>) -> Self {
        Self { pilot_repo }
    }

    /// Pilots owned by `user_id`, newest first.
    pub async fn for_user(&self, user_id: UserId) -> Result<Vec<PilotSummary>, PilotError> {
        let pilots = self.pilot_repo.list_for_user(user_id).await?;
        Ok(pilots.into_iter().map(PilotSummary::from).collect())
    }

    /// Every pilot, newest first.
    pub async fn all(&self) -> Result<Vec<PilotSummary>, PilotError> {
        let pilots = self.pilot_repo.list_all().await?;
        tracing::debug!(pilots = pilots.len(), "Listed all pilots");
        Ok(pilots.into_iter().map(PilotSummary::from).collect())
    }
}
