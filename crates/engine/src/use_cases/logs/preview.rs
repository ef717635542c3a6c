//! Preview log entry use case.
//!
//! Renders the License Level clock a log form shows before commit: the
//! pilot's standing without the log being edited, then the pending ticks
//! laid across as many level clocks as they reach.

use std::sync::Arc;

use serde::Serialize;

use lancerlog_domain::{
    advance, base_level_progress, clamp_ll_clock_change, compute_displays, ClockDisplay,
    LevelProgress, LogEntryId, PilotId,
};

use crate::infrastructure::ports::{LogEntryRepo, PilotRepo};

use super::error::LogEntryError;

/// What the form renders for a pending LL delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogPreview {
    /// Standing before the pending ticks apply
    pub base: LevelProgress,
    /// One display per level clock the ticks touch
    pub displays: Vec<ClockDisplay>,
    /// Level clocks the pending ticks fill
    pub level_ups: usize,
    /// Standing once the pending ticks are committed
    pub resulting: LevelProgress,
}

pub struct PreviewLogEntry {
    pilot_repo: Arc<dyn PilotRepo>,
    log_repo: Arc<dyn LogEntryRepo>,
    max_ll_clock_change: i32,
}

impl PreviewLogEntry {
    pub fn new(
        pilot_repo: Arc<dyn PilotRepo>,
        log_repo: Arc<dyn LogEntryRepo>,
        max_ll_clock_change: i32,
    ) -> Self {
        Self {
            pilot_repo,
            log_repo,
            max_ll_clock_change,
        }
    }

    /// Preview `pending` ticks for a pilot.
    ///
    /// With `editing` set, that log's already-applied ticks are backed out of
    /// the pilot's stored standing first, so the preview shows the log's new
    /// value in place of the old one. The log must belong to the pilot.
    pub async fn execute(
        &self,
        pilot_id: PilotId,
        editing: Option<LogEntryId>,
        pending: i32,
    ) -> Result<LogPreview, LogEntryError> {
        let pilot = self
            .pilot_repo
            .get(pilot_id)
            .await?
            .ok_or(LogEntryError::PilotNotFound(pilot_id))?;

        let already_applied = match editing {
            None => 0,
            Some(log_id) => {
                let entry = self
                    .log_repo
                    .get(log_id)
                    .await?
                    .filter(|entry| entry.pilot_id == pilot_id)
                    .ok_or(LogEntryError::LogNotFound(log_id))?;
                entry.ll_clock_change
            }
        };

        let base = base_level_progress(
            pilot.license_level(),
            pilot.ll_clock_progress(),
            already_applied,
        );
        let pending = clamp_ll_clock_change(pending, self.max_ll_clock_change);

        let displays = compute_displays(base.level, base.progress, pending);
        let level_ups = displays.iter().filter(|display| display.completes()).count();

        Ok(LogPreview {
            base,
            displays,
            level_ups,
            resulting: advance(base, pending),
        })
    }
}
