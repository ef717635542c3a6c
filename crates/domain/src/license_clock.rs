//! License Level clock progression.
//!
//! A pilot advances through License Levels 0..=12 by filling one segmented
//! clock per level. The number of segments depends on the level band:
//!
//! | Level     | Segments |
//! |-----------|----------|
//! | 1-5       | 3        |
//! | 6-9       | 4        |
//! | 10-12     | 5        |
//! | otherwise | 3        |
//!
//! Level 12 is terminal: it never accumulates partial progress and no clock
//! is displayed for it.
//!
//! Everything here is a pure function over small integers. Out-of-range input
//! is clamped, never reported as an error.

use serde::{Deserialize, Serialize};

/// Highest reachable License Level.
pub const MAX_LICENSE_LEVEL: i32 = 12;

/// Last level whose clock can hold partial progress.
pub const LAST_PROGRESSABLE_LEVEL: i32 = MAX_LICENSE_LEVEL - 1;

/// Segments used for levels outside every band (including 0 and negatives).
const DEFAULT_SEGMENTS: i32 = 3;

/// A (level, progress-within-level) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: i32,
    pub progress: i32,
}

impl LevelProgress {
    pub fn new(level: i32, progress: i32) -> Self {
        Self { level, progress }
    }

    /// Whether the terminal level has been reached.
    pub fn is_maxed(&self) -> bool {
        self.level >= MAX_LICENSE_LEVEL
    }

    /// Total ticks represented by this pair.
    pub fn total_ticks(&self) -> i32 {
        total_ticks(self.level, self.progress)
    }
}

/// One level-clock as a rendering layer should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockDisplay {
    pub level: i32,
    pub segments: i32,
    /// Segments already committed.
    pub filled: i32,
    /// Segments that the pending delta would fill.
    pub pending: i32,
}

impl ClockDisplay {
    /// True when committing the pending ticks would complete this clock.
    pub fn completes(&self) -> bool {
        self.filled + self.pending >= self.segments
    }
}

/// Number of clock segments for a License Level.
pub fn segments_for_level(level: i32) -> i32 {
    match level {
        1..=5 => 3,
        6..=9 => 4,
        10..=12 => 5,
        _ => DEFAULT_SEGMENTS,
    }
}

/// Ticks ever earned by a pilot at `current_level` with `progress` filled.
///
/// Inputs are not clamped. A `current_level` of zero or below contributes no
/// completed levels, so the result is just `progress`. Levels past the
/// terminal one count three segments each, and the sum saturates at the
/// `i32` bounds.
pub fn total_ticks(current_level: i32, progress: i32) -> i32 {
    let first_unbanded = MAX_LICENSE_LEVEL + 1;
    let banded: i32 = (0..current_level.clamp(0, first_unbanded))
        .map(segments_for_level)
        .sum();
    let unbanded = current_level.saturating_sub(first_unbanded).max(0);

    banded
        .saturating_add(DEFAULT_SEGMENTS.saturating_mul(unbanded))
        .saturating_add(progress)
}

/// Inverse of [`total_ticks`].
///
/// Negative input counts as zero. Once every level through
/// [`LAST_PROGRESSABLE_LEVEL`] is full the result is
/// `{ level: 12, progress: 0 }`; surplus ticks are discarded.
pub fn ticks_to_level_progress(total_ticks: i32) -> LevelProgress {
    let mut remaining = total_ticks.max(0);

    for level in 0..=LAST_PROGRESSABLE_LEVEL {
        let segments = segments_for_level(level);
        if remaining < segments {
            return LevelProgress::new(level, remaining);
        }
        remaining -= segments;
    }

    LevelProgress::new(MAX_LICENSE_LEVEL, 0)
}

/// Break `pending_ticks` down across the level-clocks it would fill.
///
/// The first display is always the clock at `current_level`; further levels
/// are emitted only while pending ticks remain. Nothing is emitted for a
/// maxed pilot, and ticks that would spill past level 11 are dropped.
///
/// Negative `pending_ticks` is treated as zero, which yields exactly one
/// display with `pending: 0`. A negative `current_level` starts at level 0
/// and negative `progress` counts as nothing filled.
pub fn compute_displays(current_level: i32, progress: i32, pending_ticks: i32) -> Vec<ClockDisplay> {
    if current_level >= MAX_LICENSE_LEVEL {
        return Vec::new();
    }

    let mut displays = Vec::new();
    let mut remaining = pending_ticks.max(0);
    let mut level = current_level.max(0);
    let mut progress = progress;

    while level < MAX_LICENSE_LEVEL {
        let segments = segments_for_level(level);
        let filled = progress.clamp(0, segments);
        let available = segments - filled;
        let pending = remaining.min(available);

        displays.push(ClockDisplay {
            level,
            segments,
            filled,
            pending,
        });

        remaining -= pending;
        if remaining <= 0 {
            break;
        }

        level += 1;
        progress = 0;
    }

    displays
}

/// Reconstruct the state a pilot had before `applied_delta` ticks were added.
///
/// Used when editing a log entry: the entry's previous LL delta is taken back
/// out so the edited delta can be previewed against the base. The
/// subtraction saturates at zero ticks.
pub fn base_level_progress(current_level: i32, progress: i32, applied_delta: i32) -> LevelProgress {
    let base = total_ticks(current_level, progress)
        .saturating_sub(applied_delta)
        .max(0);
    ticks_to_level_progress(base)
}

/// State after committing `delta` ticks on top of `from`.
pub fn advance(from: LevelProgress, delta: i32) -> LevelProgress {
    ticks_to_level_progress(from.total_ticks().saturating_add(delta))
}

/// Ticks needed to take a pilot from zero to the terminal level.
pub fn ticks_to_max() -> i32 {
    total_ticks(MAX_LICENSE_LEVEL, 0)
}
