//! Balance model
//!
//! Placed objects and the torque/angle math derived from them. The angle is
//! a direct proportional map of net torque, recomputed from scratch.

use serde::{Deserialize, Serialize};

use crate::settings::{ConfigError, SeesawConfig};

/// One weight resting on the plank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Signed plank-space distance (negative = left of pivot)
    pub distance_from_pivot: f32,
    pub weight: u32,
}

impl PlacedObject {
    /// Which side of the pivot this object loads. Zero counts as right.
    #[inline]
    pub fn side(&self) -> Side {
        if self.distance_from_pivot < 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Signed torque (weight * distance)
    #[inline]
    pub fn torque(&self) -> f32 {
        self.weight as f32 * self.distance_from_pivot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Torque magnitudes on each side of the pivot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Torques {
    pub left: f32,
    pub right: f32,
}

impl Torques {
    /// Positive when the right side is heavier
    pub fn net(&self) -> f32 {
        self.right - self.left
    }
}

/// Total weight on each side of the pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Weights {
    pub left: u32,
    pub right: u32,
}

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectReason {
    /// |distance| exceeds the plank half-length
    OutOfBounds { distance: f32, limit: f32 },
    NonFiniteDistance,
    ZeroWeight,
}

/// Result of `SeesawState::try_place`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Index of the new object
    Admitted(usize),
    Rejected(RejectReason),
}

impl Placement {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Placement::Admitted(_))
    }
}

/// Simulation state for one seesaw
#[derive(Debug, Clone)]
pub struct SeesawState {
    config: SeesawConfig,
    /// Tilt (degrees) as of the last tick
    current_angle: f32,
    /// Placement order, used for z-order only
    objects: Vec<PlacedObject>,
}

impl SeesawState {
    /// Build an empty plank. Fails if `config` does not validate.
    pub fn new(config: SeesawConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: SeesawConfig) -> Self {
        Self {
            config,
            current_angle: 0.0,
            objects: Vec::new(),
        }
    }

    pub fn config(&self) -> &SeesawConfig {
        &self.config
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Tilt in degrees, as computed by the most recent tick
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    /// Admit an object if it lands on the plank
    pub fn try_place(&mut self, distance_from_pivot: f32, weight: u32) -> Placement {
        if !distance_from_pivot.is_finite() {
            return Placement::Rejected(RejectReason::NonFiniteDistance);
        }
        if weight == 0 {
            return Placement::Rejected(RejectReason::ZeroWeight);
        }
        let limit = self.config.plank_half_length;
        if distance_from_pivot.abs() > limit {
            return Placement::Rejected(RejectReason::OutOfBounds {
                distance: distance_from_pivot,
                limit,
            });
        }

        self.objects.push(PlacedObject {
            distance_from_pivot,
            weight,
        });
        Placement::Admitted(self.objects.len() - 1)
    }

    pub fn compute_torques(&self) -> Torques {
        self.objects
            .iter()
            .fold(Torques::default(), |mut acc, obj| {
                match obj.side() {
                    Side::Left => acc.left += obj.torque().abs(),
                    Side::Right => acc.right += obj.torque(),
                }
                acc
            })
    }

    /// Clamped tilt for the current object set (degrees)
    pub fn compute_angle(&self) -> f32 {
        let max = self.config.max_angle;
        (self.compute_torques().net() / self.config.torque_divisor).clamp(-max, max)
    }

    pub fn compute_weights(&self) -> Weights {
        self.objects
            .iter()
            .fold(Weights::default(), |mut acc, obj| {
                match obj.side() {
                    Side::Left => acc.left += obj.weight,
                    Side::Right => acc.right += obj.weight,
                }
                acc
            })
    }

    /// Refresh `current_angle` from the objects. Called once per tick.
    pub fn recompute_angle(&mut self) -> f32 {
        self.current_angle = self.compute_angle();
        self.current_angle
    }

    /// Back to the empty baseline
    pub fn reset(&mut self) {
        self.objects.clear();
        self.current_angle = 0.0;
    }
}

impl Default for SeesawState {
    fn default() -> Self {
        Self::with_valid_config(SeesawConfig::default())
    }
}
