use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GlobeResult;
use crate::screen::ScreenConfig;

const DEFAULT_CONFIG: &str = include_str!("scenes/globe.json");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GlobeConfig {
    pub frame_rate: u32,
    pub rotation_rate: f64,
    pub rotation_rate_max: f64,
    pub max_interpolation_radius: usize,
    #[serde(default = "default_heartbeat")]
    pub heartbeat_interval_secs: u64,
    pub sphere: SphereConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SphereConfig {
    pub center: [f64; 3],
    pub radius: f64,
}

fn default_heartbeat() -> u64 {
    15
}

impl GlobeConfig {
    pub fn from_json(content: &str) -> GlobeResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> GlobeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn embedded() -> GlobeResult<Self> {
        Self::from_json(DEFAULT_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = GlobeConfig::embedded().unwrap();
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.rotation_rate, 45.0);
        assert_eq!(config.max_interpolation_radius, 3);
        assert_eq!(config.sphere.radius, 6.0);
        assert_eq!(config.screen, ScreenConfig::default());
    }

    #[test]
    fn screen_and_heartbeat_are_optional() {
        let config = GlobeConfig::from_json(
            r#"{
                "frame_rate": 20,
                "rotation_rate": -10.0,
                "rotation_rate_max": 45.0,
                "max_interpolation_radius": 1,
                "sphere": { "center": [1.0, 2.0, 3.0], "radius": 2.5 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.heartbeat_interval_secs, 15);
        assert_eq!(config.screen.dim_x, 28);
        assert_eq!(config.sphere.center, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn malformed_config_is_a_configuration_error() {
        let err = GlobeConfig::from_json("{ \"frame_rate\": \"fast\" }").unwrap_err();
        assert!(err.is_configuration());
    }
}
