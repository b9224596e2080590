//! Camera module
//!
//! Two perspective cameras share the window: a pan-orbit camera around the
//! sun and a chase camera pinned behind the spaceship. Keys `1` and `2`
//! choose which one renders and owns the pointer controls.

use bevy::prelude::*;

use crate::config::ChaseCameraConfig;
use crate::core::FrameSet;

pub mod mode;
pub mod systems;

pub use mode::CameraMode;
pub use systems::{
    ChaseCamera, OrbitCamera, apply_camera_mode, follow_spaceship, spawn_cameras,
    switch_camera_mode,
};

/// Plugin for the orbit/chase camera pair
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraMode>()
            .init_resource::<ChaseCameraConfig>()
            .add_systems(Startup, spawn_cameras)
            .add_systems(
                Update,
                (
                    switch_camera_mode,
                    apply_camera_mode.run_if(resource_changed::<CameraMode>),
                )
                    .chain()
                    .in_set(FrameSet::Input),
            )
            .add_systems(Update, follow_spaceship.in_set(FrameSet::Follow));
    }
}
