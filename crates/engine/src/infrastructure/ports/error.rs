//! Error types for port operations.

/// Repository failures surfaced to use cases.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// No row with this id. Use cases usually map an `Ok(None)` lookup to
    /// their own not-found variant; this one comes from deletes.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A write would break a storage-level rule such as a unique name.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl RepoError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn constraint(message: impl ToString) -> Self {
        Self::ConstraintViolation(message.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lancerlog_domain::LogEntryId;

    #[test]
    fn not_found_names_entity() {
        let id = LogEntryId::new();
        let err = RepoError::not_found("LogEntry", id);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), format!("LogEntry not found: {id}"));
    }

    #[test]
    fn constraint_keeps_message() {
        let err = RepoError::constraint("gear already lost");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Constraint violation: gear already lost");
    }
}
