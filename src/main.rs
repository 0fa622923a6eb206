//! EnvNode Firmware — Main Entry Point
//!
//! Bring-up order: logger → peripherals → sensor bridge → device state,
//! then the reporting loop runs forever. The transport adapter (not part
//! of this core) delivers twin documents and sensor commands into
//! [`envnode::twin`] from its own task, sharing `SharedDeviceState` with
//! this loop.
//!
//! ```text
//!  transport task ──▶ twin::handle_twin_message ──▶ SharedDeviceState
//!                                                        │
//!  reporting loop ◀── interval / confirmation blink ◀────┘
//! ```

#![deny(unused_must_use)]

use anyhow::Result;
use embedded_hal::delay::DelayNs;
use esp_idf_hal::delay::FreeRtos;
use log::{error, info, warn};

use envnode::config::SystemConfig;
use envnode::drivers::{hw_init, status_led::StatusLed};
use envnode::feedback::FeedbackController;
use envnode::sensors::SensorBridge;
use envnode::state::SharedDeviceState;
use envnode::telemetry::TelemetryMessage;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("EnvNode v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Hardware bring-up ──────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let mut bridge = match SensorBridge::init() {
        Ok(b) => b,
        Err(e) => {
            // Readings cannot be trusted without the sensor — halt.
            error!("sensor bring-up failed: {} — halting", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    // ── 3. Device state + feedback ────────────────────────────
    let config = SystemConfig::default();
    let state = SharedDeviceState::new(&config);
    let feedback = FeedbackController::new(&state, &config);
    let mut led = StatusLed::new();
    let mut delay = FreeRtos;

    let mut message_id: u32 = 0;

    // ── 4. Reporting loop ─────────────────────────────────────
    loop {
        let reading = bridge.read();
        if !reading.valid {
            warn!("reporting previous sensor values (read failed)");
        }

        message_id = message_id.wrapping_add(1);
        let msg = TelemetryMessage {
            device_id: config.device_id.as_str(),
            message_id,
            temperature: reading.temperature_c,
            humidity: reading.humidity_pct,
        };

        match msg.to_json() {
            Ok(payload) => {
                if msg.temperature_alert(config.temperature_alert_c) {
                    warn!("temperature alert: {:.1} C", msg.temperature);
                }
                // The transport adapter picks the payload up from here.
                info!("telemetry: {}", payload);
                feedback.blink_send_confirmation(&mut led, &mut delay);
            }
            Err(e) => warn!("telemetry encode failed: {}", e),
        }

        delay.delay_ms(feedback.interval_secs().saturating_mul(1000));
    }
}
