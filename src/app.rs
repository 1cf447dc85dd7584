//! Seesaw controller
//!
//! Owns one simulation plus its persistence and next-weight RNG. The
//! browser entry point holds exactly one of these and forwards clicks,
//! frames and the reset button to it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::hud::HudText;
use crate::persistence::{KeyValueStore, Persistence};
use crate::settings::{ConfigError, SeesawConfig};
use crate::sim::{Frame, Placement, SeesawState, Surface, screen_to_plank, tick};

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// Click landed outside the display surface
    OutsideSurface,
    /// Click resolved to a point past the end of the plank
    OffPlank { distance: f32 },
    Placed {
        index: usize,
        distance: f32,
        weight: u32,
    },
}

pub struct Seesaw<S> {
    state: SeesawState,
    persistence: Persistence<S>,
    rng: Pcg32,
    /// Weight of the next object placed (shown to the user ahead of time)
    next_weight: u32,
}

impl<S: KeyValueStore> Seesaw<S> {
    /// Build a seesaw, replaying any objects saved in `store`.
    /// Fails if `config` does not validate.
    pub fn new(config: SeesawConfig, store: S, seed: u64) -> Result<Self, ConfigError> {
        let mut state = SeesawState::new(config)?;
        let mut persistence = Persistence::new(store);
        persistence.restore(&mut state);

        let mut seesaw = Self {
            state,
            persistence,
            rng: Pcg32::seed_from_u64(seed),
            next_weight: 0,
        };
        seesaw.next_weight = seesaw.draw_weight();
        Ok(seesaw)
    }

    pub fn state(&self) -> &SeesawState {
        &self.state
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn next_weight(&self) -> u32 {
        self.next_weight
    }

    fn draw_weight(&mut self) -> u32 {
        let config = self.state.config();
        self.rng.random_range(config.min_weight..=config.max_weight)
    }

    /// Place the pending weight where the user clicked.
    ///
    /// `point` is relative to the surface's top-left corner. The click is
    /// resolved against the angle of the last rendered frame, i.e. the
    /// tilt the user is looking at.
    pub fn handle_click(&mut self, point: Vec2, surface: &Surface) -> ClickOutcome {
        if !surface.contains(point) {
            return ClickOutcome::OutsideSurface;
        }

        let distance = screen_to_plank(point, surface.pivot(), self.state.current_angle());
        let weight = self.next_weight;
        match self.state.try_place(distance, weight) {
            Placement::Admitted(index) => {
                log::debug!("Placed {weight}kg at {distance:.1}");
                self.persistence.save(&self.state);
                self.next_weight = self.draw_weight();
                ClickOutcome::Placed {
                    index,
                    distance,
                    weight,
                }
            }
            Placement::Rejected(reason) => {
                log::debug!("Click rejected: {reason:?}");
                ClickOutcome::OffPlank { distance }
            }
        }
    }

    /// Advance one display frame
    pub fn tick(&mut self, surface: &Surface) -> Frame {
        tick(&mut self.state, surface)
    }

    pub fn hud(&self, frame: &Frame) -> HudText {
        HudText::new(frame, self.next_weight)
    }

    /// Clear the plank and the saved snapshot. The pending weight is kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.persistence.clear();
        log::info!("Seesaw reset");
    }
}
