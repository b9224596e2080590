//! Spaceship module
//!
//! Loads the spaceship model, keeps the six movement flags in sync with the
//! keyboard and integrates them into a constant-speed translation.

use bevy::prelude::*;

use crate::config::MotionConfig;
use crate::core::FrameSet;

pub mod input;
pub mod systems;

pub use input::{Movement, MovementInput};
pub use systems::{
    ShipSpotlight, Spaceship, SpaceshipAsset, follow_spotlight, load_spaceship, move_spaceship,
    spawn_spaceship_when_loaded, track_movement_keys,
};

/// Plugin for the controllable spaceship
pub struct SpaceshipPlugin;

impl Plugin for SpaceshipPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionConfig>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, load_spaceship)
            .add_systems(Update, track_movement_keys.in_set(FrameSet::Input))
            .add_systems(
                Update,
                (spawn_spaceship_when_loaded, move_spaceship)
                    .chain()
                    .in_set(FrameSet::Motion),
            )
            .add_systems(Update, follow_spotlight.in_set(FrameSet::Follow));
    }
}
