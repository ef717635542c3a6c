//! Create corporation use case.

use std::sync::Arc;

use lancerlog_domain::{Corporation, CorporationName};

use crate::infrastructure::ports::{CorporationRepo, RepoError};

use super::error::CorporationError;

pub struct CreateCorporation {
    corporation_repo: Arc<dyn CorporationRepo>,
}

impl CreateCorporation {
    pub fn new(corporation_repo: Arc<dyn CorporationRepo>) -> Self {
        Self { corporation_repo }
    }

    /// Register a corporation pilots can earn reputation with. Names are
    /// unique ignoring case.
    pub async fn execute(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Corporation, CorporationError> {
        let mut corporation = Corporation::new(CorporationName::new(name)?);
        if let Some(description) = description {
            corporation = corporation.with_description(description);
        }

        self.corporation_repo
            .save(&corporation)
            .await
            .map_err(|err| match err {
                RepoError::ConstraintViolation(_) => {
                    CorporationError::NameTaken(corporation.name.to_string())
                }
                other => other.into(),
            })?;

        tracing::info!(corporation_id = %corporation.id, name = %corporation.name, "Created corporation");
        Ok(corporation)
    }
}
