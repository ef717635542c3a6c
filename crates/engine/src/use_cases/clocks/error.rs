//! Personal clock operation errors.

use crate::infrastructure::ports::RepoError;
use lancerlog_domain::{ClockId, DomainError, PilotId};

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("Clock not found: {0}")]
    ClockNotFound(ClockId),
    #[error("Pilot not found: {0}")]
    PilotNotFound(PilotId),
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
