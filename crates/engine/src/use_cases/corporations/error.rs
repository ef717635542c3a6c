//! Corporation operation errors.

use crate::infrastructure::ports::RepoError;
use lancerlog_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum CorporationError {
    #[error("Corporation name already taken: {0}")]
    NameTaken(String),
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
