//! Camera mode state and chase-rig math

use bevy::prelude::*;

/// Which camera renders and receives pointer input.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    Orbit,
    Chase,
}

/// Enabled state of each camera's controls for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFlags {
    pub orbit: bool,
    pub chase: bool,
}

impl CameraMode {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(CameraMode::Orbit),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(CameraMode::Chase),
            _ => None,
        }
    }

    /// Exactly one camera's controls are live at a time.
    pub fn controls(self) -> ControlFlags {
        ControlFlags {
            orbit: self == CameraMode::Orbit,
            chase: self == CameraMode::Chase,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraMode::Orbit => "Orbit",
            CameraMode::Chase => "Chase",
        }
    }
}

/// Yaw, pitch and radius that place a pan-orbit camera at `offset` from its focus.
pub fn orbit_angles(offset: Vec3) -> (f32, f32, f32) {
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return (0.0, 0.0, 0.0);
    }
    let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();
    let yaw = offset.x.atan2(offset.z);
    (yaw, pitch, radius)
}

/// Inverse of [`orbit_angles`].
pub fn orbit_offset(yaw: f32, pitch: f32, radius: f32) -> Vec3 {
    Vec3::new(
        radius * pitch.cos() * yaw.sin(),
        radius * pitch.sin(),
        radius * pitch.cos() * yaw.cos(),
    )
}
