//! System configuration parameters
//!
//! All tunable parameters for the EnvNode firmware. The reporting
//! interval can be overridden at runtime through a device-twin update;
//! everything else is fixed per build.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Device identifier embedded in every telemetry message.
    pub device_id: heapless::String<32>,

    // --- Reporting ---
    /// Telemetry reporting interval at boot (seconds).
    pub default_report_interval_secs: u32,
    /// Lowest interval a twin update may set (seconds).
    pub min_report_interval_secs: u32,

    // --- Alerts ---
    /// Temperature (Celsius) above which telemetry is flagged as an alert.
    pub temperature_alert_c: f32,

    // --- Feedback ---
    /// Duration of the general-purpose LED pulse (milliseconds).
    pub blink_pulse_ms: u32,
    /// Duration of each confirmation pulse (milliseconds).
    pub confirm_pulse_ms: u32,
    /// Number of pulses in the send-confirmation pattern.
    pub confirm_pulses: u8,
}

impl Default for SystemConfig {
    fn default() -> Self {
        let mut device_id = heapless::String::new();
        let _ = device_id.push_str("envnode-01");
        Self {
            device_id,

            // Reporting
            default_report_interval_secs: 10,
            min_report_interval_secs: 1,

            // Alerts
            temperature_alert_c: 30.0,

            // Feedback
            blink_pulse_ms: 500,
            confirm_pulse_ms: 100,
            confirm_pulses: 2,
        }
    }
}
