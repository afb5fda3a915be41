//! Tuning constants for the flight model

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{Result, Vec3};

/// All tunables of the flight model. Angles are in degrees, distances in world
/// units, rates per second unless noted otherwise.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Throttle change per update call. Applied per call rather than per
    /// second, so throttle response tracks frame rate (original tuning).
    pub throttle_ramp: f32,
    /// Turn rate ceiling in degrees per second; the effective rate is
    /// `turn_rate_limit * (maneuverability - throttle)`.
    pub turn_rate_limit: f32,
    /// Margin above full throttle. Must be > 1 so the craft can still turn
    /// at full throttle; higher values make speed cost less agility.
    pub maneuverability: f32,
    /// Speed at zero throttle, units per second.
    pub speed_base: f32,
    /// Additional speed at full throttle, units per second.
    pub speed_limit: f32,
    /// Rudder (yaw keys) contribution to the heading offset.
    pub yaw_gain: f32,
    /// Vertical mouse contribution to the pitch offset.
    pub pitch_gain: f32,
    /// Horizontal mouse contribution to the roll offset.
    pub roll_gain: f32,
    /// Initial camera position in world space.
    pub start_position: [f32; 3],
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            throttle_ramp: 0.01,
            turn_rate_limit: 40.0,
            maneuverability: 1.50,
            speed_base: 0.0,
            speed_limit: 80.0,
            yaw_gain: 1.0,
            pitch_gain: 10.0,
            roll_gain: 10.0,
            start_position: [40.0, -150.0, 50.0],
        }
    }
}

impl FlightConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initial camera position as a vector
    pub fn start_position(&self) -> Vec3 {
        Vec3::from(self.start_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference_values() {
        let config = FlightConfig::default();
        assert_eq!(config.throttle_ramp, 0.01);
        assert_eq!(config.turn_rate_limit, 40.0);
        assert_eq!(config.maneuverability, 1.50);
        assert_eq!(config.speed_base, 0.0);
        assert_eq!(config.speed_limit, 80.0);
        assert!(config.maneuverability > 1.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FlightConfig = serde_json::from_str(r#"{"speed_limit": 120.0}"#).unwrap();
        assert_eq!(config.speed_limit, 120.0);
        assert_eq!(config.throttle_ramp, 0.01);
        assert_eq!(config.turn_rate_limit, 40.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = FlightConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: FlightConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.speed_limit, config.speed_limit);
        assert_eq!(parsed.start_position, config.start_position);
    }
}
