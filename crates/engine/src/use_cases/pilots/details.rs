//! Pilot details use case.
//!
//! Assembles what a pilot sheet shows: the pilot, the current LL clock,
//! gear still owned and net reputation per corporation.

use std::sync::Arc;

use serde::Serialize;

use lancerlog_domain::{ClockDisplay, ExoticGear, Pilot, PilotId, ReputationStanding};

use crate::infrastructure::ports::{GearRepo, PilotRepo, ReputationRepo};

use super::error::PilotError;

#[derive(Debug, Clone, Serialize)]
pub struct PilotDetails {
    pub pilot: Pilot,
    pub ll_clock_segments: i32,
    /// Current LL clock; empty once the pilot is maxed
    pub ll_clock: Vec<ClockDisplay>,
    pub gear: Vec<ExoticGear>,
    pub reputation: Vec<ReputationStanding>,
}

pub struct GetPilotDetails {
    pilot_repo: Arc<dyn PilotRepo>,
    gear_repo: Arc<dyn GearRepo>,
    reputation_repo: Arc<dyn ReputationRepo>,
}

impl GetPilotDetails {
    pub fn new(
        pilot_repo: Arc<dyn PilotRepo>,
        gear_repo: Arc<dyn GearRepo>,
        reputation_repo: Arc<dyn ReputationRepo>,
    ) -> Self {
        Self {
            pilot_repo,
            gear_repo,
            reputation_repo,
        }
    }

    pub async fn execute(&self, pilot_id: PilotId) -> Result<PilotDetails, PilotError> {
        let pilot = self
            .pilot_repo
            .get(pilot_id)
            .await?
            .ok_or(PilotError::PilotNotFound(pilot_id))?;

        let gear = self
            .gear_repo
            .list_for_pilot(pilot_id)
            .await?
            .into_iter()
            .filter(|g| !g.is_lost())
            .collect();
        let changes = self.reputation_repo.list_for_pilot(pilot_id).await?;

        Ok(PilotDetails {
            ll_clock_segments: pilot.ll_clock_segments(),
            ll_clock: pilot.clock_displays(0),
            gear,
            reputation: ReputationStanding::tally(&changes),
            pilot,
        })
    }
}
