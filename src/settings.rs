//! Seesaw configuration
//!
//! Every geometric constant lives here so plank variants can differ
//! without touching the physics. Persisted separately from the object
//! snapshot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::persistence::KeyValueStore;

/// Reasons a configuration is unusable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("plank half-length must be positive and finite, got {0}")]
    PlankHalfLength(f32),
    #[error("max angle must be within (0, 90) degrees, got {0}")]
    MaxAngle(f32),
    #[error("torque divisor must be positive and finite, got {0}")]
    TorqueDivisor(f32),
    #[error("object size must be positive, got base {base} + {per_weight}/kg")]
    Size { base: f32, per_weight: f32 },
    #[error("weight range {min}..={max} is empty or starts at zero")]
    WeightRange { min: u32, max: u32 },
}

/// Plank geometry and weight range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeesawConfig {
    /// Largest admissible |distance from pivot|
    pub plank_half_length: f32,
    /// Tilt clamp (degrees)
    pub max_angle: f32,
    /// Divides net torque into degrees of tilt
    pub torque_divisor: f32,
    /// Rendered objects sit this many px above the plank axis
    pub vertical_offset: f32,

    // === Object size ===
    pub size_base: f32,
    pub size_per_weight: f32,

    // === Next weight ===
    pub min_weight: u32,
    pub max_weight: u32,
}

impl Default for SeesawConfig {
    fn default() -> Self {
        Self {
            plank_half_length: PLANK_HALF_LENGTH,
            max_angle: MAX_ANGLE,
            torque_divisor: TORQUE_DIVISOR,
            vertical_offset: VERTICAL_OFFSET,

            size_base: SIZE_BASE,
            size_per_weight: SIZE_PER_WEIGHT,

            min_weight: MIN_WEIGHT,
            max_weight: MAX_WEIGHT,
        }
    }
}

impl SeesawConfig {
    /// Storage key
    const STORAGE_KEY: &'static str = "seesaw_config";

    /// Check that the constants describe a usable plank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.plank_half_length.is_finite() && self.plank_half_length > 0.0) {
            return Err(ConfigError::PlankHalfLength(self.plank_half_length));
        }
        if !(self.max_angle > 0.0 && self.max_angle < 90.0) {
            return Err(ConfigError::MaxAngle(self.max_angle));
        }
        if !(self.torque_divisor.is_finite() && self.torque_divisor > 0.0) {
            return Err(ConfigError::TorqueDivisor(self.torque_divisor));
        }
        if !(self.size_base > 0.0 && self.size_per_weight >= 0.0) {
            return Err(ConfigError::Size {
                base: self.size_base,
                per_weight: self.size_per_weight,
            });
        }
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(ConfigError::WeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        Ok(())
    }

    /// Rendered edge length (px) of an object with the given weight
    pub fn size_for(&self, weight: u32) -> f32 {
        self.size_base + self.size_per_weight * weight as f32
    }

    /// Load the config from a store, falling back to defaults when it is
    /// missing, malformed or invalid
    pub fn load_from(store: &impl KeyValueStore) -> Self {
        let json = match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("Using default seesaw config");
                return Self::default();
            }
            Err(e) => {
                log::warn!("Config read failed ({e}), using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&json) {
            Ok(config) => match config.validate() {
                Ok(()) => {
                    log::info!("Loaded seesaw config");
                    config
                }
                Err(e) => {
                    log::warn!("Stored config rejected: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Stored config is malformed: {e}");
                Self::default()
            }
        }
    }

    /// Write the config to a store
    pub fn save_to(&self, store: &mut impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => match store.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Seesaw config saved"),
                Err(e) => log::warn!("Config write failed: {e}"),
            },
            Err(e) => log::warn!("Config serialization failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults_are_valid() {
        let config = SeesawConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.plank_half_length, 260.0);
        assert_eq!(config.max_angle, 30.0);
        assert_eq!(config.torque_divisor, 10.0);
    }

    #[test]
    fn test_size_formula() {
        let config = SeesawConfig::default();
        assert_eq!(config.size_for(1), 62.0);
        assert_eq!(config.size_for(10), 80.0);

        let alt = SeesawConfig {
            size_base: 10.0,
            size_per_weight: 4.0,
            ..Default::default()
        };
        assert_eq!(alt.size_for(5), 30.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = SeesawConfig {
            max_angle: 90.0,
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(ConfigError::MaxAngle(90.0)));

        let bad = SeesawConfig {
            torque_divisor: 0.0,
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(ConfigError::TorqueDivisor(0.0)));

        let bad = SeesawConfig {
            min_weight: 5,
            max_weight: 2,
            ..Default::default()
        };
        assert_eq!(
            bad.validate(),
            Err(ConfigError::WeightRange { min: 5, max: 2 })
        );

        let bad = SeesawConfig {
            plank_half_length: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::PlankHalfLength(_))));
    }

    #[test]
    fn test_load_missing_uses_defaults() {
        let store = MemoryStore::new();
        assert_eq!(SeesawConfig::load_from(&store), SeesawConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let config = SeesawConfig {
            plank_half_length: 290.0,
            vertical_offset: 15.0,
            ..Default::default()
        };
        config.save_to(&mut store);
        assert_eq!(SeesawConfig::load_from(&store), config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let mut store = MemoryStore::new();
        store
            .set("seesaw_config", r#"{"plank_half_length": 290.0}"#)
            .unwrap();
        let config = SeesawConfig::load_from(&store);
        assert_eq!(config.plank_half_length, 290.0);
        assert_eq!(config.max_angle, MAX_ANGLE);
    }

    #[test]
    fn test_invalid_or_malformed_falls_back() {
        let mut store = MemoryStore::new();
        store.set("seesaw_config", "not json").unwrap();
        assert_eq!(SeesawConfig::load_from(&store), SeesawConfig::default());

        store
            .set("seesaw_config", r#"{"max_angle": -5.0}"#)
            .unwrap();
        assert_eq!(SeesawConfig::load_from(&store), SeesawConfig::default());
    }
}
