//! Stat display text

use crate::sim::Frame;

/// Text for the four stat readouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub angle: String,
    pub left_weight: String,
    pub right_weight: String,
    pub next_weight: String,
}

impl HudText {
    pub fn new(frame: &Frame, next_weight: u32) -> Self {
        Self {
            angle: format_angle(frame.angle),
            left_weight: format_kg(frame.weights.left),
            right_weight: format_kg(frame.weights.right),
            next_weight: format_kg(next_weight),
        }
    }
}

/// One decimal and a degree sign, e.g. `-12.5°`
pub fn format_angle(angle: f32) -> String {
    let text = format!("{angle:.1}");
    // Tiny negative tilts would otherwise read "-0.0°"
    if text == "-0.0" {
        "0.0°".to_string()
    } else {
        format!("{text}°")
    }
}

pub fn format_kg(weight: u32) -> String {
    format!("{weight} kg")
}

/// Label drawn on an object
pub fn object_label(weight: u32) -> String {
    format!("{weight}kg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Torques, Weights};

    #[test]
    fn test_format_angle() {
        assert_eq!(format_angle(0.0), "0.0°");
        assert_eq!(format_angle(30.0), "30.0°");
        assert_eq!(format_angle(-12.46), "-12.5°");
        assert_eq!(format_angle(-0.0), "0.0°");
        assert_eq!(format_angle(-0.04), "0.0°");
    }

    #[test]
    fn test_hud_from_frame() {
        let frame = Frame {
            angle: 7.26,
            torques: Torques::default(),
            weights: Weights { left: 3, right: 12 },
            objects: Vec::new(),
        };
        let hud = HudText::new(&frame, 6);
        assert_eq!(hud.angle, "7.3°");
        assert_eq!(hud.left_weight, "3 kg");
        assert_eq!(hud.right_weight, "12 kg");
        assert_eq!(hud.next_weight, "6 kg");
        assert_eq!(object_label(6), "6kg");
    }
}
