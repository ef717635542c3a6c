//! Use cases - user story orchestration.
//!
//! Each use case holds the ports it needs as `Arc<dyn Port>` and exposes a
//! single `execute`. Containers group them per family for the `App`.

pub mod clocks;
pub mod corporations;
pub mod logs;
pub mod pilots;

pub use clocks::{
    ClockError, ClockUseCases, CreateClock, DeleteClock, TickClock, UpdateClock, UpdateClockInput,
};
pub use corporations::{
    CorporationError, CorporationUseCases, CreateCorporation, ListCorporations,
};
pub use logs::{
    DeleteLogEntry, EditLogEntry, ListLogs, LogEntryError, LogEntryUseCases, LogPreview,
    PreviewLogEntry, RecordLogEntry,
};
pub use pilots::{
    CreatePilot, CreatePilotInput, DeletePilot, GetPilotDetails, ListPilots, PilotDetails,
    PilotError, PilotSummary, PilotUseCases, RecalculatePilot, UpdatePilot, UpdatePilotInput,
};
