//! Sensor subsystem — the bridge between this core and the physical
//! sensor.
//!
//! [`SensorBridge::init`] performs the one-time hardware bring-up; the
//! reporting loop then pulls [`Reading`] snapshots from the bridge. The
//! bridge owns no state beyond "initialized/not" plus the last good
//! snapshot for fault masking.

pub mod hts221;

use core::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};

use crate::error::Error;
use hts221::Hts221;

/// Process-wide bring-up guard. The underlying peripheral setup must
/// not run twice; the surrounding system calls [`SensorBridge::init`]
/// exactly once at startup.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// One temperature/humidity snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Reading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
    /// `false` when the sensor could not be read this cycle and the
    /// values are the previous good ones.
    pub valid: bool,
}

/// Owns the sensor after one-time bring-up.
pub struct SensorBridge {
    sensor: Hts221,
    last: Reading,
}

impl SensorBridge {
    /// One-time hardware bring-up. Must be called exactly once before
    /// any reading occurs; a repeat call is rejected. Bring-up failure
    /// is fatal — the surrounding system must abort startup because
    /// readings cannot otherwise be trusted.
    pub fn init() -> Result<Self, Error> {
        if INITIALIZED.swap(true, Ordering::SeqCst) {
            warn!("sensors: bring-up requested twice");
            return Err(Error::Init("sensor bridge already initialized"));
        }

        let sensor = Hts221::power_on().map_err(|e| {
            log::error!("sensors: HTS221 bring-up failed: {e}");
            Error::Init("HTS221 bring-up failed")
        })?;

        info!("sensors: HTS221 ready");
        Ok(Self {
            sensor,
            last: Reading {
                temperature_c: 0.0,
                humidity_pct: 0.0,
                valid: false,
            },
        })
    }

    /// Whether bring-up has already happened in this process.
    pub fn is_initialized() -> bool {
        INITIALIZED.load(Ordering::SeqCst)
    }

    /// Latest snapshot. A failed bus read keeps the previous good
    /// values and reports them as invalid rather than crashing the
    /// reporting loop.
    pub fn read(&mut self) -> Reading {
        match self.sensor.read() {
            Some((temperature_c, humidity_pct)) => {
                self.last = Reading {
                    temperature_c,
                    humidity_pct,
                    valid: true,
                };
            }
            None => {
                warn!("sensors: HTS221 read failed, retaining previous values");
                self.last.valid = false;
            }
        }
        self.last
    }
}
