//! Log entry use cases.
//!
//! Every mutation here ends with a pilot recalculation so the stored pilot
//! and its personal clocks always reflect the full log history.

use std::sync::Arc;

use lancerlog_domain::{ClockProgressEntry, PilotId};

use crate::infrastructure::ports::{ClockRepo, RepoError};

mod delete;
mod edit;
mod error;
mod list;
mod preview;
mod record;

pub use delete::DeleteLogEntry;
pub use edit::EditLogEntry;
pub use error::LogEntryError;
pub use list::ListLogs;
pub use preview::{LogPreview, PreviewLogEntry};
pub use record::RecordLogEntry;

/// Container for log entry use cases.
pub struct LogEntryUseCases {
    pub record: Arc<RecordLogEntry>,
    pub edit: Arc<EditLogEntry>,
    pub delete: Arc<DeleteLogEntry>,
    pub preview: Arc<PreviewLogEntry>,
    pub list: Arc<ListLogs>,
}

impl LogEntryUseCases {
    pub fn new(
        record: Arc<RecordLogEntry>,
        edit: Arc<EditLogEntry>,
        delete: Arc<DeleteLogEntry>,
        preview: Arc<PreviewLogEntry>,
        list: Arc<ListLogs>,
    ) -> Self {
        Self {
            record,
            edit,
            delete,
            preview,
            list,
        }
    }
}

/// Keep only progress lines that target clocks owned by `pilot_id`.
async fn owned_clock_progress(
    clock_repo: &dyn ClockRepo,
    pilot_id: PilotId,
    entries: Vec<ClockProgressEntry>,
) -> Result<Vec<ClockProgressEntry>, RepoError> {
    let mut owned = Vec::with_capacity(entries.len());
    for entry in entries {
        match clock_repo.get(entry.clock_id).await? {
            Some(clock) if clock.belongs_to(pilot_id) => owned.push(entry),
            _ => tracing::warn!(
                clock_id = %entry.clock_id,
                pilot_id = %pilot_id,
                "Dropping clock progress for a clock the pilot does not own"
            ),
        }
    }
    Ok(owned)
}
