//! Device state — reporting interval and confirmation signal.
//!
//! [`DeviceState`] is the single piece of mutable state in the core. It
//! is written by the message-delivery path (twin updates) and read by
//! the reporting loop (interval, confirmation blink), which typically
//! run in different execution contexts. [`SharedDeviceState`] wraps it
//! in a `critical-section`-backed blocking mutex so both sides can hold
//! a reference without any implicit global visibility.
//!
//! Confirmation signal lifecycle:
//!
//! ```text
//! {cleared} ──(valid twin update accepted)──▶ {raised}
//! {raised}  ──(feedback cycle completed)────▶ {cleared}
//! ```
//!
//! No other transitions exist; a sensor-command message never raises it.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::config::SystemConfig;

// ───────────────────────────────────────────────────────────────
// DeviceState
// ───────────────────────────────────────────────────────────────

/// Reporting interval plus the pending-confirmation flag.
#[derive(Debug, Clone)]
pub struct DeviceState {
    report_interval_secs: u32,
    min_interval_secs: u32,
    confirm_pending: bool,
}

impl DeviceState {
    /// Initial state: configured default interval, confirmation cleared.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            report_interval_secs: config.default_report_interval_secs,
            min_interval_secs: config.min_report_interval_secs,
            confirm_pending: false,
        }
    }

    /// The last valid reporting interval. Never zero, never a sentinel.
    pub fn interval_secs(&self) -> u32 {
        self.report_interval_secs
    }

    /// The only interval writer. Rejects values below the configured
    /// minimum and leaves the state untouched on rejection; on success
    /// replaces the interval and raises the confirmation flag.
    pub fn try_apply_interval(&mut self, secs: u32) -> bool {
        if secs < self.min_interval_secs {
            return false;
        }
        self.report_interval_secs = secs;
        self.confirm_pending = true;
        true
    }

    /// Whether an accepted configuration change still awaits its
    /// visible acknowledgement.
    pub fn confirmation_pending(&self) -> bool {
        self.confirm_pending
    }

    /// Called by the feedback layer once a confirmation blink cycle has
    /// completed. Idempotent.
    pub fn clear_confirmation(&mut self) {
        self.confirm_pending = false;
    }
}

// ───────────────────────────────────────────────────────────────
// SharedDeviceState
// ───────────────────────────────────────────────────────────────

/// [`DeviceState`] behind an explicit mutual-exclusion primitive.
///
/// Constructed once at startup and passed by reference into the
/// message-handling context and the reporting-loop context. Every
/// accessor takes the lock for the duration of one read or one
/// transition — no lock is ever held across a blocking operation.
pub struct SharedDeviceState {
    inner: Mutex<CriticalSectionRawMutex, RefCell<DeviceState>>,
}

impl SharedDeviceState {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(DeviceState::new(config))),
        }
    }

    /// See [`DeviceState::interval_secs`].
    pub fn interval_secs(&self) -> u32 {
        self.inner.lock(|s| s.borrow().interval_secs())
    }

    /// See [`DeviceState::try_apply_interval`].
    pub fn try_apply_interval(&self, secs: u32) -> bool {
        self.inner.lock(|s| s.borrow_mut().try_apply_interval(secs))
    }

    /// See [`DeviceState::confirmation_pending`].
    pub fn confirmation_pending(&self) -> bool {
        self.inner.lock(|s| s.borrow().confirmation_pending())
    }

    /// See [`DeviceState::clear_confirmation`].
    pub fn clear_confirmation(&self) {
        self.inner.lock(|s| s.borrow_mut().clear_confirmation());
    }
}
