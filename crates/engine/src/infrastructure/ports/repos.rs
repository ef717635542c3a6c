//! Repository port traits for persistence.
//!
//! One trait per stored entity. Adapters own transactions and access
//! control; the use cases only rely on the contracts below.

use async_trait::async_trait;
use lancerlog_domain::*;

use super::error::RepoError;

// =============================================================================
// Pilots
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PilotRepo: Send + Sync {
    async fn get(&self, id: PilotId) -> Result<Option<Pilot>, RepoError>;
    async fn save(&self, pilot: &Pilot) -> Result<(), RepoError>;
    /// Removes the pilot together with everything it owns: logs, clocks,
    /// gear and reputation changes.
    async fn delete(&self, id: PilotId) -> Result<(), RepoError>;
    /// Newest first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Pilot>, RepoError>;
    /// Every user's pilots, newest first.
    async fn list_all(&self) -> Result<Vec<Pilot>, RepoError>;
}

// =============================================================================
// Log History
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogEntryRepo: Send + Sync {
    async fn get(&self, id: LogEntryId) -> Result<Option<LogEntry>, RepoError>;
    async fn save(&self, entry: &LogEntry) -> Result<(), RepoError>;
    /// Removes the entry row only. Reputation changes and gear losses it
    /// recorded are left to the caller.
    async fn delete(&self, id: LogEntryId) -> Result<(), RepoError>;
    /// Newest first.
    async fn list_for_pilot(&self, pilot_id: PilotId) -> Result<Vec<LogEntry>, RepoError>;
    /// Every pilot's logs, newest first.
    async fn list_all(&self) -> Result<Vec<LogEntry>, RepoError>;
}

// =============================================================================
// Personal Clocks
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClockRepo: Send + Sync {
    async fn get(&self, id: ClockId) -> Result<Option<Clock>, RepoError>;
    async fn save(&self, clock: &Clock) -> Result<(), RepoError>;
    async fn delete(&self, id: ClockId) -> Result<(), RepoError>;
    async fn list_for_pilot(&self, pilot_id: PilotId) -> Result<Vec<Clock>, RepoError>;
}

// =============================================================================
// Exotic Gear
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GearRepo: Send + Sync {
    async fn get(&self, id: GearId) -> Result<Option<ExoticGear>, RepoError>;
    async fn save(&self, gear: &ExoticGear) -> Result<(), RepoError>;
    async fn list_for_pilot(&self, pilot_id: PilotId) -> Result<Vec<ExoticGear>, RepoError>;
    /// Gear whose loss was recorded by `log_id`.
    async fn list_lost_in(&self, log_id: LogEntryId) -> Result<Vec<ExoticGear>, RepoError>;
}

// =============================================================================
// Corporations and Reputation
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CorporationRepo: Send + Sync {
    async fn get(&self, id: CorporationId) -> Result<Option<Corporation>, RepoError>;
    /// Fails with `ConstraintViolation` when another corporation already
    /// has the same name.
    async fn save(&self, corporation: &Corporation) -> Result<(), RepoError>;
    /// Ordered by name.
    async fn list(&self) -> Result<Vec<Corporation>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReputationRepo: Send + Sync {
    async fn save_change(&self, change: &ReputationChange) -> Result<(), RepoError>;
    async fn list_for_pilot(&self, pilot_id: PilotId) -> Result<Vec<ReputationChange>, RepoError>;
    async fn delete_for_log(&self, log_id: LogEntryId) -> Result<(), RepoError>;
}
