//! Common helpers for use case tests.
//!
//! `TestWorld` wires a full [`App`] over a fresh in-memory store and a fixed
//! clock, for tests that exercise several use cases together.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use lancerlog_domain::{
    Clock, ClockId, ClockName, Corporation, ExoticGear, GearName, Pilot,
    PilotId, PilotName, UserId,
};

use crate::app::{App, Repositories};
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::ClockPort;
use crate::use_cases::CreatePilotInput;

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap()
}

pub fn fixed_clock() -> Arc<dyn ClockPort> {
    Arc::new(FixedClock(fixed_time()))
}

/// A fresh LL 0 pilot owned by a random user.
pub fn test_pilot() -> Pilot {
    Pilot::new(UserId::new(), PilotName::new("Test Pilot").unwrap(), fixed_time())
}

pub struct TestWorld {
    pub app: App,
    pub user_id: UserId,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        Self {
            app: App::new(Repositories::in_memory(), fixed_clock(), EngineConfig::default()),
            user_id: UserId::new(),
        }
    }

    pub async fn pilot(&self, name: &str) -> Pilot {
        self.app
            .use_cases
            .pilots
            .create
            .execute(
                self.user_id,
                CreatePilotInput {
                    name: name.to_string(),
                    ..CreatePilotInput::default()
                },
            )
            .await
            .unwrap()
    }

    /// A clock with `segments` segments and a tick amount of 1.
    pub async fn clock(&self, pilot_id: PilotId, segments: i32) -> Clock {
        let clock = Clock::new(
            Some(pilot_id),
            ClockName::new("Test Clock").unwrap(),
            segments,
            1,
            fixed_time(),
        )
        .unwrap();
        self.app.repositories.clocks.save(&clock).await.unwrap();
        clock
    }

    pub async fn corporation(&self, name: &str) -> Corporation {
        self.app
            .use_cases
            .corporations
            .create
            .execute(name.to_string(), None)
            .await
            .unwrap()
    }

    /// Gear already held before any log in the test.
    pub async fn gear(&self, pilot_id: PilotId, name: &str) -> ExoticGear {
        let gear = ExoticGear::new(pilot_id, GearName::new(name).unwrap(), fixed_time());
        self.app.repositories.gear.save(&gear).await.unwrap();
        gear
    }

    pub async fn reload(&self, pilot_id: PilotId) -> Pilot {
        self.app
            .repositories
            .pilots
            .get(pilot_id)
            .await
            .unwrap()
            .unwrap()
    }

    pub async fn reload_clock(&self, clock_id: ClockId) -> Clock {
        self.app
            .repositories
            .clocks
            .get(clock_id)
            .await
            .unwrap()
            .unwrap()
    }
}
