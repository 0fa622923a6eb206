//! Unified error types for the EnvNode firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping
//! the caller's error handling uniform. All variants are `Copy` so they
//! can be cheaply passed between the message-delivery path and the main
//! loop without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A device-twin document could not be applied.
    Twin(TwinError),
    /// A sensor-command message could not be read.
    Command(CommandError),
    /// Hardware bring-up failed. Fatal — the surrounding system must
    /// abort startup because sensor readings cannot be trusted.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Twin(e) => write!(f, "twin: {e}"),
            Self::Command(e) => write!(f, "command: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Twin-update errors
// ---------------------------------------------------------------------------

/// Failures while interpreting a device-twin document.
///
/// An absent interval key is *not* an error — it parses to
/// [`TwinOutcome::Unchanged`](crate::twin::TwinOutcome::Unchanged).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinError {
    /// The document is not parseable JSON. No state was mutated.
    Malformed,
    /// The interval key is present but its value is not a positive
    /// integer at or above the configured minimum. No state was mutated.
    InvalidInterval,
}

impl fmt::Display for TwinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed twin document"),
            Self::InvalidInterval => write!(f, "invalid reporting interval"),
        }
    }
}

impl From<TwinError> for Error {
    fn from(e: TwinError) -> Self {
        Self::Twin(e)
    }
}

// ---------------------------------------------------------------------------
// Sensor-command errors
// ---------------------------------------------------------------------------

/// Failures while extracting the numeric field from a command message.
///
/// The two variants let a transport that routes by message type tell
/// "wrong command" apart from "right command, bad payload"; callers that
/// don't route may treat both the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The text does not match the `key:value` command shape, or the key
    /// is not the expected one.
    WrongShape,
    /// The value field cannot be parsed as a finite real number.
    InvalidNumber,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongShape => write!(f, "unrecognized command shape"),
            Self::InvalidNumber => write!(f, "value is not a number"),
        }
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
