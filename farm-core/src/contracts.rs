//! Integration contracts for a future backend.
//!
//! These shapes are declared for the sensor feed, irrigation control and
//! authenticated requests. No handler consumes them yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

/// A single sensor sample pushed by a field device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub value: f64,
    pub timestamp: DateTime<Utc>,
    pub area_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IrrigationAction {
    Start,
    Stop,
}

/// Command to start or stop irrigation of one area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationControl {
    pub area_id: String,
    pub action: IrrigationAction,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irrigation_control_wire_shape() {
        let cmd: IrrigationControl =
            serde_json::from_str(r#"{"areaId":"area1","action":"START","duration":30}"#).unwrap();
        assert_eq!(cmd.action, IrrigationAction::Start);
        assert_eq!(cmd.duration, Some(30));

        let stop = IrrigationControl {
            area_id: "area2".to_string(),
            action: IrrigationAction::Stop,
            duration: None,
        };
        assert_eq!(
            serde_json::to_string(&stop).unwrap(),
            r#"{"areaId":"area2","action":"STOP"}"#
        );
    }

    #[test]
    fn test_sensor_reading_uses_camel_case() {
        let json = r#"{"value":68.5,"timestamp":"2025-01-02T03:04:05Z","areaId":"area3"}"#;
        let reading: SensorReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.area_id, "area3");
    }
}
