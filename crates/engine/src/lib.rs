//! Lancerlog Engine library.
//!
//! Pilot log bookkeeping on top of the License Level clock engine in
//! `lancerlog-domain`.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the repository ports
//! - `infrastructure/` - Ports, the in-memory adapter, clock and config
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared fixtures for use case tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
