//! EnvNode firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod config;
pub mod error;
pub mod feedback;
pub mod state;
pub mod telemetry;
pub mod twin;

// Hardware-facing modules; the actual peripheral access is guarded by
// cfg attributes inside, so the crate builds on the host as well.
pub mod drivers;
pub mod sensors;

pub mod pins;
