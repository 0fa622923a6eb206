//! User LED driver.
//!
//! A single digital-output LED driven through hw_init.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO configured by hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::feedback::IndicatorPort;

pub struct StatusLed {
    on: bool,
}

impl StatusLed {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::led_set(on);
        self.on = on;
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl IndicatorPort for StatusLed {
    fn set_indicator(&mut self, on: bool) {
        self.set(on);
    }
}
