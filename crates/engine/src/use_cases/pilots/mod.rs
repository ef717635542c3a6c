//! Pilot use cases.
//!
//! Roster management, the pilot sheet, and the recalculation every log
//! mutation finishes with.

use std::sync::Arc;

mod create;
mod delete;
mod details;
mod error;
mod list;
mod recalculate;
mod update;

pub use create::{CreatePilot, CreatePilotInput};
pub use delete::DeletePilot;
pub use details::{GetPilotDetails, PilotDetails};
pub use error::PilotError;
pub use list::{ListPilots, PilotSummary};
pub use recalculate::RecalculatePilot;
pub use update::{UpdatePilot, UpdatePilotInput};

/// Container for pilot use cases.
pub struct PilotUseCases {
    pub create: Arc<CreatePilot>,
    pub update: Arc<UpdatePilot>,
    pub delete: Arc<DeletePilot>,
    pub list: Arc<ListPilots>,
    pub details: Arc<GetPilotDetails>,
    pub recalculate: Arc<RecalculatePilot>,
}

impl PilotUseCases {
    pub fn new(
        create: Arc<CreatePilot>,
        update: Arc<UpdatePilot>,
        delete: Arc<DeletePilot>,
        list: Arc<ListPilots>,
        details: Arc<GetPilotDetails>,
        recalculate: Arc<RecalculatePilot>,
    ) -> Self {
        Self {
            create,
            update,
            delete,
            list,
            details,
            recalculate,
        }
    }
}
