//! Value objects - Immutable objects defined by their attributes

mod log_filter;
mod names;
mod resources;

// GM log listing
pub use log_filter::{LogFilter, ResourceDirection, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

// Validated names
pub use names::{ClockName, CorporationName, GearName, PilotName};

// Derived pilot resources
pub use resources::ResourceTotals;
