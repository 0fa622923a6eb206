//! Outbound telemetry payload assembly.
//!
//! The reporting loop builds one [`TelemetryMessage`] per cycle from the
//! latest sensor snapshot and hands the serialized document to the
//! transport. The alert check lets the caller tag messages that exceed
//! the configured temperature threshold.

use serde::Serialize;

/// A point-in-time telemetry document.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryMessage<'a> {
    #[serde(rename = "deviceId")]
    pub device_id: &'a str,
    #[serde(rename = "messageId")]
    pub message_id: u32,
    pub temperature: f32,
    pub humidity: f32,
}

impl TelemetryMessage<'_> {
    /// Serialize to the JSON document the transport sends.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Whether this message should carry the temperature-alert tag.
    pub fn temperature_alert(&self, threshold_c: f32) -> bool {
        self.temperature > threshold_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> TelemetryMessage<'static> {
        TelemetryMessage {
            device_id: "envnode-01",
            message_id: 7,
            temperature: 21.5,
            humidity: 40.0,
        }
    }

    #[test]
    fn serializes_every_field() {
        let json = message().to_json().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["deviceId"], "envnode-01");
        assert_eq!(doc["messageId"], 7);
        assert_eq!(doc["temperature"], 21.5);
        assert_eq!(doc["humidity"], 40.0);
    }

    #[test]
    fn alert_fires_strictly_above_threshold() {
        let mut msg = message();
        msg.temperature = 30.0;
        assert!(!msg.temperature_alert(30.0));
        msg.temperature = 30.1;
        assert!(msg.temperature_alert(30.0));
    }
}
