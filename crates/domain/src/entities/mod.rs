//! Domain entities - Core business objects with identity

mod clock;
mod corporation;
mod gear;
mod log_entry;

pub use clock::Clock;
pub use corporation::{Corporation, ReputationChange, ReputationStanding};
pub use gear::ExoticGear;
pub use log_entry::{
    clamp_ll_clock_change, ClockProgressEntry, GearAcquiredEntry, GearLostEntry, LogEntry,
    LogEntryDraft, LogEntryUpdate, LogType, ReputationChangeEntry, DEFAULT_MAX_LL_CLOCK_CHANGE,
};
