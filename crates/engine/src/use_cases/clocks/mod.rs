//! Personal clock use cases.

use std::sync::Arc;

mod create;
mod delete;
mod error;
mod tick;
mod update;

pub use create::CreateClock;
pub use delete::DeleteClock;
pub use error::ClockError;
pub use tick::TickClock;
pub use update::{UpdateClock, UpdateClockInput};

/// Container for clock use cases.
pub struct ClockUseCases {
    pub create: Arc<CreateClock>,
    pub update: Arc<UpdateClock>,
    pub tick: Arc<TickClock>,
    pub delete: Arc<DeleteClock>,
}

impl ClockUseCases {
    pub fn new(
        create: Arc<CreateClock>,
        update: Arc<UpdateClock>,
        tick: Arc<TickClock>,
        delete: Arc<DeleteClock>,
    ) -> Self {
        Self {
            create,
            update,
            tick,
            delete,
        }
    }
}
