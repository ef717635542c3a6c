//! Corporation use cases.

use std::sync::Arc;

mod create;
mod error;
mod list;

pub use create::CreateCorporation;
pub use error::CorporationError;
pub use list::ListCorporations;

/// Container for corporation use cases.
pub struct CorporationUseCases {
    pub create: Arc<CreateCorporation>,
    pub list: Arc<ListCorporations>,
}

impl CorporationUseCases {
    pub fn new(create: Arc<CreateCorporation>, list: Arc<ListCorporations>) -> Self {
        Self { create, list }
    }
}
