//! Aggregates - entities whose derived state is guarded by private fields

pub mod pilot;

pub use pilot::{Pilot, PilotProfileUpdate};
