//! Seesaw Sim - a torque-balance seesaw toy
//!
//! Core modules:
//! - `sim`: Balance model, coordinate transform and the per-frame tick
//! - `settings`: Tunable plank geometry and weight range
//! - `persistence`: Object snapshot save/restore over a key-value store
//! - `platform`: Browser/native platform abstraction
//! - `hud`: Stat text for the angle and weight displays
//! - `app`: The controller that owns one simulation and drives it

pub mod app;
pub mod hud;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use app::{ClickOutcome, Seesaw};
pub use hud::HudText;
pub use persistence::{KeyValueStore, MemoryStore, Persistence};
pub use settings::{ConfigError, SeesawConfig};

/// Default simulation constants
pub mod consts {
    /// Half of the plank length (plank is 520px wide)
    pub const PLANK_HALF_LENGTH: f32 = 260.0;
    /// Tilt clamp in degrees
    pub const MAX_ANGLE: f32 = 30.0;
    /// Net torque is divided by this to get degrees of tilt
    pub const TORQUE_DIVISOR: f32 = 10.0;
    /// Lifts rendered objects above the plank surface
    pub const VERTICAL_OFFSET: f32 = 25.0;

    /// Object size in px is `SIZE_BASE + SIZE_PER_WEIGHT * weight`
    pub const SIZE_BASE: f32 = 60.0;
    pub const SIZE_PER_WEIGHT: f32 = 2.0;

    /// Range for randomly drawn weights (inclusive)
    pub const MIN_WEIGHT: u32 = 1;
    pub const MAX_WEIGHT: u32 = 10;
}
