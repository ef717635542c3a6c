//! Pilot resource totals derived from log history.
//!
//! A pilot's manna, downtime and License Level are never edited directly.
//! They are the fold of every log entry the pilot owns.

use serde::{Deserialize, Serialize};

use crate::entities::LogEntry;
use crate::license_clock::{ticks_to_level_progress, LevelProgress};

/// Summed resources for one pilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceTotals {
    pub manna: i64,
    pub downtime: i64,
    /// Sum of every log's LL delta, before level conversion.
    pub ll_ticks: i32,
    pub license_level: i32,
    pub ll_clock_progress: i32,
}

impl ResourceTotals {
    /// Fold a pilot's log entries. Order does not matter.
    pub fn from_logs<'a>(logs: impl IntoIterator<Item = &'a LogEntry>) -> Self {
        let (manna, downtime, ll_ticks) =
            logs.into_iter()
                .fold((0i64, 0i64, 0i32), |(manna, downtime, ticks), log| {
                    (
                        manna + log.manna_change,
                        downtime + log.downtime_change,
                        ticks.saturating_add(log.ll_clock_change),
                    )
                });

        let LevelProgress { level, progress } = ticks_to_level_progress(ll_ticks);

        Self {
            manna,
            downtime,
            ll_ticks,
            license_level: level,
            ll_clock_progress: progress,
        }
    }

    pub fn level_progress(&self) -> LevelProgress {
        LevelProgress::new(self.license_level, self.ll_clock_progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{LogEntry, LogType};
    use crate::PilotId;
    use chrono::Utc;

    fn log(manna: i64, downtime: i64, ticks: i32) -> LogEntry {
        let mut entry = LogEntry::new(PilotId::new(), LogType::Game, ticks, 25, Utc::now());
        entry.manna_change = manna;
        entry.downtime_change = downtime;
        entry
    }

    #[test]
    fn empty_history_is_level_zero() {
        assert_eq!(ResourceTotals::from_logs(std::iter::empty()), ResourceTotals::default());
    }

    #[test]
    fn sums_resources_and_levels() {
        let logs = vec![log(100, 2, 3), log(-40, 1, 3), log(0, -1, 1)];
        let totals = ResourceTotals::from_logs(&logs);

        assert_eq!(totals.manna, 60);
        assert_eq!(totals.downtime, 2);
        assert_eq!(totals.ll_ticks, 7);
        assert_eq!(totals.level_progress(), LevelProgress::new(2, 1));
    }

    #[test]
    fn saturates_at_terminal_level() {
        let logs: Vec<_> = (0..3).map(|_| log(0, 0, 25)).collect();
        let totals = ResourceTotals::from_logs(&logs);
        assert_eq!(totals.ll_ticks, 75);
        assert_eq!(totals.license_level, 12);
        assert_eq!(totals.ll_clock_progress, 0);
    }
}
