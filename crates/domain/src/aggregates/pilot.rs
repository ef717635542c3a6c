//! Pilot aggregate - a player's character and its derived bookkeeping
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: derived values (resources, License Level) can only
//!   change through [`Pilot::apply_totals`]
//! - **Newtypes**: `PilotName` for validated name
//! - **Builder pattern**: Fluent API for optional profile fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::license_clock::{compute_displays, segments_for_level, ClockDisplay, LevelProgress};
use crate::value_objects::{PilotName, ResourceTotals};
use lancerlog_domain::{PilotId, UserId};

/// A pilot owned by a user.
///
/// # Invariants
///
/// - `license_level` and `ll_clock_progress` always come from
///   `ticks_to_level_progress`, so `0 <= ll_clock_progress < segments` or the
///   pilot is at level 12 with zero progress
/// - `manna` and `downtime` equal the sums over the pilot's log history
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use lancerlog_domain::{Pilot, PilotName, UserId};
///
/// let pilot = Pilot::new(UserId::new(), PilotName::new("Ace").unwrap(), Utc::now());
/// assert_eq!(pilot.license_level(), 0);
/// assert_eq!(pilot.ll_clock_segments(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    id: PilotId,
    user_id: UserId,

    // Profile
    name: PilotName,
    callsign: Option<String>,
    background: Option<String>,
    notes: Option<String>,

    // Derived from the log history
    license_level: i32,
    ll_clock_progress: i32,
    manna: i64,
    downtime: i64,

    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Partial profile edit. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilotProfileUpdate {
    pub name: Option<PilotName>,
    pub callsign: Option<String>,
    pub background: Option<String>,
    pub notes: Option<String>,
}

impl Pilot {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a pilot with an empty log history (LL 0, no resources).
    pub fn new(user_id: UserId, name: PilotName, now: DateTime<Utc>) -> Self {
        Self {
            id: PilotId::new(),
            user_id,
            name,
            callsign: None,
            background: None,
            notes: None,
            license_level: 0,
            ll_clock_progress: 0,
            manna: 0,
            downtime: 0,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_callsign(mut self, callsign: impl Into<String>) -> Self {
        self.callsign = Some(callsign.into());
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> PilotId {
        self.id
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn name(&self) -> &PilotName {
        &self.name
    }

    #[inline]
    pub fn callsign(&self) -> Option<&str> {
        self.callsign.as_deref()
    }

    #[inline]
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    #[inline]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    #[inline]
    pub fn license_level(&self) -> i32 {
        self.license_level
    }

    #[inline]
    pub fn ll_clock_progress(&self) -> i32 {
        self.ll_clock_progress
    }

    #[inline]
    pub fn manna(&self) -> i64 {
        self.manna
    }

    #[inline]
    pub fn downtime(&self) -> i64 {
        self.downtime
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // License Level
    // =========================================================================

    /// Segments in the clock for the pilot's current level.
    pub fn ll_clock_segments(&self) -> i32 {
        segments_for_level(self.license_level)
    }

    pub fn level_progress(&self) -> LevelProgress {
        LevelProgress::new(self.license_level, self.ll_clock_progress)
    }

    /// Level-clocks to draw if `pending_ticks` were added now.
    pub fn clock_displays(&self, pending_ticks: i32) -> Vec<ClockDisplay> {
        compute_displays(self.license_level, self.ll_clock_progress, pending_ticks)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Overwrite every derived field from a fresh fold of the log history.
    ///
    /// Returns `true` when the License Level changed.
    pub fn apply_totals(&mut self, totals: &ResourceTotals, now: DateTime<Utc>) -> bool {
        let leveled = self.license_level != totals.license_level;
        self.license_level = totals.license_level;
        self.ll_clock_progress = totals.ll_clock_progress;
        self.manna = totals.manna;
        self.downtime = totals.downtime;
        self.updated_at = now;
        leveled
    }

    pub fn update_profile(&mut self, update: PilotProfileUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(callsign) = update.callsign {
            self.callsign = Some(callsign);
        }
        if let Some(background) = update.background {
            self.background = Some(background);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap()
    }

    fn test_pilot() -> Pilot {
        Pilot::new(UserId::new(), PilotName::new("Ace").unwrap(), fixed_time())
    }

    #[test]
    fn new_pilot_starts_at_level_zero() {
        let pilot = test_pilot();
        assert_eq!(pilot.level_progress(), LevelProgress::new(0, 0));
        assert_eq!(pilot.manna(), 0);
        assert_eq!(pilot.downtime(), 0);
        assert_eq!(pilot.created_at(), pilot.updated_at());
    }

    #[test]
    fn apply_totals_reports_level_change() {
        let mut pilot = test_pilot();
        let totals = ResourceTotals {
            manna: 250,
            downtime: 3,
            ll_ticks: 19,
            license_level: 6,
            ll_clock_progress: 1,
        };
        let later = Utc.with_ymd_and_hms(2025, 3, 2, 18, 0, 0).unwrap();

        assert!(pilot.apply_totals(&totals, later));
        assert_eq!(pilot.ll_clock_segments(), 4);
        assert_eq!(pilot.manna(), 250);
        assert_eq!(pilot.updated_at(), later);

        assert!(!pilot.apply_totals(&totals, later));
    }

    #[test]
    fn clock_displays_use_current_state() {
        let mut pilot = test_pilot();
        let totals = ResourceTotals {
            ll_ticks: 7,
            license_level: 2,
            ll_clock_progress: 1,
            ..ResourceTotals::default()
        };
        pilot.apply_totals(&totals, fixed_time());

        let displays = pilot.clock_displays(5);
        assert_eq!(displays.len(), 2);
        assert_eq!(displays[0].pending, 2);
        assert_eq!(displays[1].pending, 3);
    }

    #[test]
    fn update_profile_keeps_unset_fields() {
        let mut pilot = test_pilot().with_callsign("Jester").with_notes("Owes HA a favor");
        pilot.update_profile(
            PilotProfileUpdate {
                callsign: Some("Joker".to_string()),
                ..PilotProfileUpdate::default()
            },
            fixed_time(),
        );

        assert_eq!(pilot.callsign(), Some("Joker"));
        assert_eq!(pilot.notes(), Some("Owes HA a favor"));
        assert_eq!(pilot.name().as_str(), "Ace");
    }
}
