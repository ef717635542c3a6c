//! Log entry operation errors.

use crate::infrastructure::ports::RepoError;
use crate::use_cases::pilots::PilotError;
use lancerlog_domain::{DomainError, LogEntryId, PilotId};

#[derive(Debug, thiserror::Error)]
pub enum LogEntryError {
    #[error("Log entry not found: {0}")]
    LogNotFound(LogEntryId),
    #[error("Pilot not found: {0}")]
    PilotNotFound(PilotId),
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Recalculation failed: {0}")]
    Recalculate(#[from] PilotError),
}
