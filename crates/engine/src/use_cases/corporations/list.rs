//! List corporations use case.

use std::sync::Arc;

use lancerlog_domain::Corporation;

use crate::infrastructure::ports::CorporationRepo;

use super::error::CorporationError;

pub struct ListCorporations {
    corporation_repo: Arc<dyn CorporationRepo>,
}

impl ListCorporations {
    pub fn new(corporation_repo: Arc<dyn CorporationRepo>) -> Self {
        Self { corporation_repo }
    }

    /// Every corporation, ordered by name.
    pub async fn execute(&self) -> Result<Vec<Corporation>, CorporationError> {
        Ok(self.corporation_repo.list().await?)
    }
}
