//! Engine-agnostic plumbing shared by the scene plugins.

use bevy::prelude::*;

pub mod assets;
pub mod deferred;

pub use assets::{AssetStatus, poll_load};
pub use deferred::Deferred;

/// Per-frame ordering of the scene's `Update` systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard state and camera mode changes.
    Input,
    /// Orbits, spins and everything attached to bodies.
    Animate,
    /// Spaceship translation.
    Motion,
    /// Chase camera and spotlight tracking the spaceship.
    Follow,
    /// Hover, click boosts and labels.
    Interaction,
}
