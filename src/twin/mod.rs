//! Inbound message interpretation.
//!
//! The transport layer delivers raw message text; this module classifies
//! it and extracts typed values. Three message shapes exist:
//!
//! - **Twin documents** (JSON). A *complete* snapshot nests the desired
//!   properties under the top-level `"desired"` object:
//!   `{"desired": {"interval": 30, ...}, "reported": {...}}`.
//!   A *partial* delta is the desired object itself:
//!   `{"interval": 30, ...}`. The only interpreted key is `"interval"`
//!   (seconds, positive integer); everything else passes through
//!   untouched.
//! - **Sensor commands** (`key:value` text). `temp:<number>` and
//!   `hum:<number>`, long keywords `temperature:` / `humidity:` also
//!   accepted, keyword case-insensitive, optional whitespace around the
//!   colon and value.
//!
//! Parsing is stateless and re-entrant; the only state mutation happens
//! through [`SharedDeviceState`](crate::state::SharedDeviceState) when a
//! twin update carries a valid interval.

pub mod command;
pub mod update;

pub use command::{read_hum_message, read_temp_message};
pub use update::{TwinOutcome, TwinUpdateKind, handle_twin_message};
