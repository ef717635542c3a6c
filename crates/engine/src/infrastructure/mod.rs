//! Infrastructure: ports, adapters and runtime configuration.

pub mod clock;
pub mod config;
pub mod memory;
pub mod ports;
