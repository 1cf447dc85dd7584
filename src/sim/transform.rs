//! Screen <-> plank coordinate transform
//!
//! Screen space has its origin at the display surface's top-left corner with
//! y growing downward. Plank space is a single signed distance along the
//! plank's own axis, measured from the pivot. Angles are in degrees,
//! positive tilting the right end down.

use glam::Vec2;

/// The display surface the seesaw is drawn on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The pivot sits at the middle of the surface
    #[inline]
    pub fn pivot(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a surface-relative point lies on the surface (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

/// A surface as laid out on the page: where its top-left corner sits in
/// client (viewport) coordinates, plus its size. Clicks and rendering both
/// take their geometry from this so they agree on where the pivot is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub origin: Vec2,
    pub surface: Surface,
}

impl ClientRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            surface: Surface::new(width, height),
        }
    }

    /// Client coordinates to surface-relative coordinates
    #[inline]
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - self.origin
    }
}

/// Project a click onto the tilted plank's axis.
///
/// The click is made pivot-relative and then rotated by `-angle` so the
/// plank is horizontal again; the x component is the plank distance.
pub fn screen_to_plank(click: Vec2, pivot: Vec2, angle_deg: f32) -> f32 {
    let rel = click - pivot;
    let (sin, cos) = (-angle_deg.to_radians()).sin_cos();
    rel.x * cos - rel.y * sin
}

/// Screen position of a point `distance` along the plank tilted by `angle_deg`,
/// raised by `vertical_offset` so objects rest on top of the plank.
pub fn plank_to_screen(distance: f32, angle_deg: f32, pivot: Vec2, vertical_offset: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vec2::new(
        pivot.x + distance * cos,
        pivot.y + distance * sin - vertical_offset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_surface_pivot_and_bounds() {
        let surface = Surface::new(800.0, 400.0);
        assert_eq!(surface.pivot(), Vec2::new(400.0, 200.0));
        assert!(surface.contains(Vec2::new(0.0, 0.0)));
        assert!(surface.contains(Vec2::new(800.0, 400.0)));
        assert!(!surface.contains(Vec2::new(-1.0, 10.0)));
        assert!(!surface.contains(Vec2::new(10.0, 400.5)));
    }

    #[test]
    fn test_client_rect_shares_pivot_with_clicks() {
        // Container scrolled/offset on the page
        let rect = ClientRect::new(120.0, 64.0, 800.0, 400.0);
        let local = rect.to_local(Vec2::new(620.0, 264.0));
        assert_eq!(local, Vec2::new(500.0, 200.0));
        assert!(rect.surface.contains(local));
        assert!((screen_to_plank(local, rect.surface.pivot(), 0.0) - 100.0).abs() < EPS);

        // A click at the rendered position of an object resolves back to it
        let drawn = plank_to_screen(-75.0, 14.0, rect.surface.pivot(), 0.0);
        let client = drawn + rect.origin;
        let d = screen_to_plank(rect.to_local(client), rect.surface.pivot(), 14.0);
        assert!((d + 75.0).abs() < EPS);

        assert!(!rect.surface.contains(rect.to_local(Vec2::new(100.0, 100.0))));
    }

    #[test]
    fn test_level_plank_uses_x_offset() {
        let pivot = Vec2::new(400.0, 200.0);
        assert!((screen_to_plank(Vec2::new(500.0, 180.0), pivot, 0.0) - 100.0).abs() < EPS);
        assert!((screen_to_plank(Vec2::new(250.0, 230.0), pivot, 0.0) + 150.0).abs() < EPS);
    }

    #[test]
    fn test_tilted_click_is_unrotated() {
        let pivot = Vec2::new(0.0, 0.0);
        // Plank tilted 30° (right end down); a point 100 along the plank
        let on_plank = Vec2::new(100.0 * 30f32.to_radians().cos(), 100.0 * 30f32.to_radians().sin());
        assert!((screen_to_plank(on_plank, pivot, 30.0) - 100.0).abs() < EPS);
        // Naively reading x would undercount the distance
        assert!((on_plank.x - 100.0).abs() > 10.0);
    }

    #[test]
    fn test_plank_to_screen_level() {
        let pivot = Vec2::new(400.0, 200.0);
        let pos = plank_to_screen(-120.0, 0.0, pivot, 25.0);
        assert!((pos.x - 280.0).abs() < EPS);
        assert!((pos.y - 175.0).abs() < EPS);
    }

    #[test]
    fn test_plank_to_screen_tilted_down_right() {
        let pivot = Vec2::new(0.0, 0.0);
        let pos = plank_to_screen(100.0, 30.0, pivot, 0.0);
        assert!((pos.x - 86.6025).abs() < EPS);
        // Screen y grows downward, so a positive tilt lowers the right end
        assert!((pos.y - 50.0).abs() < EPS);
    }

    #[test]
    fn test_round_trip_with_offset_added_back() {
        let pivot = Vec2::new(300.0, 150.0);
        let offset = 25.0;
        let pos = plank_to_screen(77.0, -12.5, pivot, offset);
        let d = screen_to_plank(pos + Vec2::new(0.0, offset), pivot, -12.5);
        assert!((d - 77.0).abs() < EPS);
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            d in -1000.0f32..1000.0,
            angle in -30.0f32..=30.0,
            px in 0.0f32..2000.0,
            py in 0.0f32..2000.0,
        ) {
            let pivot = Vec2::new(px, py);
            let screen = plank_to_screen(d, angle, pivot, 0.0);
            let back = screen_to_plank(screen, pivot, angle);
            prop_assert!((back - d).abs() < 1e-2, "d={d} angle={angle} back={back}");
        }
    }
}
