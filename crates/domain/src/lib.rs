extern crate self as lancerlog_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod license_clock;
pub mod value_objects;

pub use aggregates::{Pilot, PilotProfileUpdate};

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    clamp_ll_clock_change, Clock, ClockProgressEntry, Corporation, ExoticGear, GearAcquiredEntry,
    GearLostEntry, LogEntry, LogEntryDraft, LogEntryUpdate, LogType, ReputationChange,
    ReputationChangeEntry, ReputationStanding, DEFAULT_MAX_LL_CLOCK_CHANGE,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{ClockId, CorporationId, GearId, LogEntryId, PilotId, ReputationChangeId, UserId};

// Re-export the LL clock engine
pub use license_clock::{
    advance, base_level_progress, compute_displays, segments_for_level, ticks_to_level_progress,
    ticks_to_max, total_ticks, ClockDisplay, LevelProgress, LAST_PROGRESSABLE_LEVEL,
    MAX_LICENSE_LEVEL,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    ClockName, CorporationName, GearName, LogFilter, PilotName, ResourceDirection, ResourceTotals,
    DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
