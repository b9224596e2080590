//! Celestial body components for the Bevy ECS system

use std::f32::consts::TAU;

use bevy::prelude::*;

/// Marker for the sun and planets, storing the display radius.
#[derive(Component, Debug, Clone, Copy)]
pub struct CelestialBody {
    pub radius: f32,
}

/// Circular orbit parameters around the shared orbit center
#[derive(Component, Debug, Clone, Copy)]
pub struct Orbit {
    pub radius: f32,
    pub speed_factor: f32,
}

/// Spin state about the body's vertical axis.
///
/// `speed` is the active per-frame increment. A click boost raises it
/// temporarily; `baseline` remembers the value it must return to.
#[derive(Component, Debug, Clone, Copy)]
pub struct SelfRotation {
    pub speed: f32,
    pub angle: f32,
    baseline: Option<f32>,
}

impl SelfRotation {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            angle: 0.0,
            baseline: None,
        }
    }

    pub fn advance(&mut self) {
        if self.speed != 0.0 {
            self.angle = (self.angle + self.speed).rem_euclid(TAU);
        }
    }

    /// Raise the active speed to `baseline + increase`.
    ///
    /// The baseline is captured on the first boost only, so repeated boosts
    /// never compound.
    pub fn boost(&mut self, increase: f32) -> f32 {
        let baseline = *self.baseline.get_or_insert(self.speed);
        self.speed = baseline + increase;
        self.speed
    }

    /// Restore the pre-boost speed. No-op if never boosted.
    pub fn revert(&mut self) {
        if let Some(baseline) = self.baseline {
            self.speed = baseline;
        }
    }

    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }
}

/// Flat ring that follows its parent body and faces a fixed point
#[derive(Component, Debug, Clone, Copy)]
pub struct PlanetRing {
    pub parent: Entity,
}

/// Small craft circling a host body in step with the host's spin
#[derive(Component, Debug, Clone, Copy)]
pub struct Satellite {
    pub host: Entity,
    pub distance: f32,
}
