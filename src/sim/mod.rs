//! Seesaw simulation module
//!
//! Pure, platform-free logic:
//! - Torque/angle model over the placed objects
//! - Screen <-> plank coordinate transform
//! - Per-frame recompute producing a render snapshot

pub mod state;
pub mod tick;
pub mod transform;

pub use state::{PlacedObject, Placement, RejectReason, SeesawState, Side, Torques, Weights};
pub use tick::{Frame, ObjectView, tick};
pub use transform::{ClientRect, Surface, plank_to_screen, screen_to_plank};
