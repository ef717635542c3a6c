//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Persistence (one repository per stored entity)
//! - Time (for testing)

mod error;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{ClockRepo, CorporationRepo, GearRepo, LogEntryRepo, PilotRepo, ReputationRepo};

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{
    MockClockRepo, MockCorporationRepo, MockGearRepo, MockLogEntryRepo, MockPilotRepo,
    MockReputationRepo,
};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
