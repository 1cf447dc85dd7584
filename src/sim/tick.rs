//! Per-frame recompute
//!
//! Called by whatever drives the display (requestAnimationFrame, a timer,
//! a test loop). Each call is a full recompute; nothing accumulates.

use glam::Vec2;

use super::state::{SeesawState, Torques, Weights};
use super::transform::{Surface, plank_to_screen};

/// Render data for one placed object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectView {
    /// Centre of the object on screen
    pub position: Vec2,
    /// Edge length in px
    pub size: f32,
    pub weight: u32,
}

impl ObjectView {
    /// Top-left corner (for absolutely positioned elements)
    pub fn top_left(&self) -> Vec2 {
        self.position - Vec2::splat(self.size / 2.0)
    }
}

/// Everything needed to draw one frame, all against the same angle
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Plank tilt (degrees)
    pub angle: f32,
    pub torques: Torques,
    pub weights: Weights,
    /// In placement order
    pub objects: Vec<ObjectView>,
}

/// Recompute the angle and lay out every object on the given surface
pub fn tick(state: &mut SeesawState, surface: &Surface) -> Frame {
    let angle = state.recompute_angle();
    let pivot = surface.pivot();
    let config = state.config();

    let objects = state
        .objects()
        .iter()
        .map(|obj| ObjectView {
            position: plank_to_screen(
                obj.distance_from_pivot,
                angle,
                pivot,
                config.vertical_offset,
            ),
            size: config.size_for(obj.weight),
            weight: obj.weight,
        })
        .collect();

    Frame {
        angle,
        torques: state.compute_torques(),
        weights: state.compute_weights(),
        objects,
    }
}
