//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::EngineConfig,
    memory::InMemoryStore,
    ports::{ClockPort, ClockRepo, CorporationRepo, GearRepo, LogEntryRepo, PilotRepo, ReputationRepo},
};
use crate::use_cases;

/// Main application state.
///
/// Holds all repository ports and use cases.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub config: EngineConfig,
}

/// Container for all repository ports.
#[derive(Clone)]
pub struct Repositories {
    pub pilots: Arc<dyn PilotRepo>,
    pub logs: Arc<dyn LogEntryRepo>,
    pub clocks: Arc<dyn ClockRepo>,
    pub gear: Arc<dyn GearRepo>,
    pub corporations: Arc<dyn CorporationRepo>,
    pub reputation: Arc<dyn ReputationRepo>,
}

impl Repositories {
    /// Every port backed by one shared in-memory store.
    pub fn in_memory() -> Self {
        let store = InMemoryStore::shared();
        Self {
            pilots: store.clone(),
            logs: store.clone(),
            clocks: store.clone(),
            gear: store.clone(),
            corporations: store.clone(),
            reputation: store,
        }
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub pilots: use_cases::PilotUseCases,
    pub logs: use_cases::LogEntryUseCases,
    pub clocks: use_cases::ClockUseCases,
    pub corporations: use_cases::CorporationUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: Repositories, clock_port: Arc<dyn ClockPort>, config: EngineConfig) -> Self {
        let max_change = config.max_ll_clock_change;

        let recalculate = Arc::new(use_cases::RecalculatePilot::new(
            repos.pilots.clone(),
            repos.logs.clone(),
            repos.clocks.clone(),
            clock_port.clone(),
        ));

        let pilots = use_cases::PilotUseCases::new(
            Arc::new(use_cases::CreatePilot::new(
                repos.pilots.clone(),
                clock_port.clone(),
            )),
            Arc::new(use_cases::UpdatePilot::new(
                repos.pilots.clone(),
                clock_port.clone(),
            )),
            Arc::new(use_cases::DeletePilot::new(repos.pilots.clone())),
            Arc::new(use_cases::ListPilots::new(repos.pilots.clone())),
            Arc::new(use_cases::GetPilotDetails::new(
                repos.pilots.clone(),
                repos.gear.clone(),
                repos.reputation.clone(),
            )),
            recalculate.clone(),
        );

        let logs = use_cases::LogEntryUseCases::new(
            Arc::new(use_cases::RecordLogEntry::new(
                repos.pilots.clone(),
                repos.logs.clone(),
                repos.clocks.clone(),
                repos.gear.clone(),
                repos.corporations.clone(),
                repos.reputation.clone(),
                recalculate.clone(),
                clock_port.clone(),
                max_change,
            )),
            Arc::new(use_cases::EditLogEntry::new(
                repos.logs.clone(),
                repos.clocks.clone(),
                recalculate.clone(),
                clock_port.clone(),
                max_change,
            )),
            Arc::new(use_cases::DeleteLogEntry::new(
                repos.logs.clone(),
                repos.gear.clone(),
                repos.reputation.clone(),
                recalculate,
            )),
            Arc::new(use_cases::PreviewLogEntry::new(
                repos.pilots.clone(),
                repos.logs.clone(),
                max_change,
            )),
            Arc::new(use_cases::ListLogs::new(
                repos.pilots.clone(),
                repos.logs.clone(),
                config.gm_log_page_limit,
            )),
        );

        let clocks = use_cases::ClockUseCases::new(
            Arc::new(use_cases::CreateClock::new(
                repos.pilots.clone(),
                repos.clocks.clone(),
                clock_port.clone(),
            )),
            Arc::new(use_cases::UpdateClock::new(
                repos.clocks.clone(),
                repos.logs.clone(),
                clock_port.clone(),
            )),
            Arc::new(use_cases::TickClock::new(
                repos.clocks.clone(),
                repos.logs.clone(),
                clock_port,
            )),
            Arc::new(use_cases::DeleteClock::new(repos.clocks.clone())),
        );

        let corporations = use_cases::CorporationUseCases::new(
            Arc::new(use_cases::CreateCorporation::new(repos.corporations.clone())),
            Arc::new(use_cases::ListCorporations::new(repos.corporations.clone())),
        );

        Self {
            repositories: repos,
            use_cases: UseCases {
                pilots,
                logs,
                clocks,
                corporations,
            },
            config,
        }
    }
}
