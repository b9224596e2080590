//! User interface module
//!
//! This module owns the cubemap background and the screen-space overlay:
//! the UI camera and the controls hint.

use bevy::prelude::*;

use crate::camera::CameraMode;

pub mod hud;
pub mod skybox;

pub use hud::{OverlayCamera, refresh_hud, spawn_overlay};
pub use skybox::SkyboxPlugin;

/// Plugin for the overlay camera and hint text
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_overlay)
            .add_systems(Update, refresh_hud.run_if(resource_changed::<CameraMode>));
    }
}
