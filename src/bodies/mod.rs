//! Celestial bodies module
//!
//! This module owns the sun, the planets, their rings and the satellite:
//! the static body table, orbit math, and the per-frame update systems.

use bevy::prelude::*;

use crate::core::FrameSet;

pub mod catalog;
pub mod components;
pub mod orbit;
pub mod systems;

pub use components::{CelestialBody, PlanetRing, SelfRotation};
pub use orbit::OrbitClock;
pub use systems::{
    advance_orbit_clock, spawn_bodies, spin_bodies, update_orbits, update_rings,
    update_satellites,
};

/// Plugin for orbiting and spinning bodies
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitClock>()
            .add_systems(Startup, spawn_bodies)
            .add_systems(
                Update,
                (
                    advance_orbit_clock,
                    update_orbits,
                    update_rings,
                    spin_bodies,
                    update_satellites,
                )
                    .chain()
                    .in_set(FrameSet::Animate),
            );
    }
}
