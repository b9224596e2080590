//! Camera spawning, mode switching and chase tracking

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::bodies::catalog::ORBIT_CENTER;
use crate::camera::mode::{CameraMode, orbit_angles, orbit_offset};
use crate::config::{ChaseCameraConfig, MotionConfig};
use crate::spaceship::Spaceship;

const ORBIT_CAMERA_START: Vec3 = Vec3::new(640.0, 480.0, 240.0);
const ORBIT_CAMERA_FOV_DEG: f32 = 75.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 10_000.0;

// The pan-orbit plugin routes pointer input to the highest-order camera
// under the cursor, inactive ones included.
pub const LIVE_ORDER: isize = 1;
pub const STANDBY_ORDER: isize = 0;

/// Marker for the primary, freely orbitable camera.
///
/// Picking and label orientation always use this camera, even while the
/// chase camera is rendering.
#[derive(Component)]
pub struct OrbitCamera;

/// Marker for the camera that trails the spaceship
#[derive(Component)]
pub struct ChaseCamera;

/// Pan-orbit parameters that put the chase camera at `ship + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChasePose {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl ChasePose {
    pub fn new(ship: Vec3, offset: Vec3) -> Self {
        let (yaw, pitch, radius) = orbit_angles(offset);
        Self {
            focus: ship,
            yaw,
            pitch,
            radius,
        }
    }

    pub fn transform(&self) -> Transform {
        let position = self.focus + orbit_offset(self.yaw, self.pitch, self.radius);
        Transform::from_translation(position).looking_at(self.focus, Vec3::Y)
    }

    fn apply(&self, poc: &mut PanOrbitCamera) {
        poc.focus = self.focus;
        poc.target_focus = self.focus;
        poc.radius = Some(self.radius);
        poc.target_radius = self.radius;
        poc.yaw = Some(self.yaw);
        poc.target_yaw = self.yaw;
        poc.pitch = Some(self.pitch);
        poc.target_pitch = self.pitch;
        poc.force_update = true;
    }
}

fn perspective(fov_deg: f32) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: fov_deg.to_radians(),
        near: NEAR,
        far: FAR,
        ..default()
    })
}

/// Spawn the orbit camera (active) and the chase camera (inactive)
pub fn spawn_cameras(
    mut commands: Commands,
    chase: Res<ChaseCameraConfig>,
    motion: Res<MotionConfig>,
) {
    let (yaw, pitch, radius) = orbit_angles(ORBIT_CAMERA_START - ORBIT_CENTER);
    commands.spawn((
        Camera3d::default(),
        perspective(ORBIT_CAMERA_FOV_DEG),
        Camera {
            order: LIVE_ORDER,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        PanOrbitCamera {
            focus: ORBIT_CENTER,
            radius: Some(radius),
            yaw: Some(yaw),
            pitch: Some(pitch),
            force_update: true,
            ..default()
        },
        OrbitCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(ORBIT_CAMERA_START).looking_at(ORBIT_CENTER, Vec3::Y),
        Name::new("Orbit Camera"),
    ));

    let pose = ChasePose::new(motion.start, chase.offset);
    commands.spawn((
        Camera3d::default(),
        perspective(chase.fov_deg),
        Camera {
            order: STANDBY_ORDER,
            is_active: false,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        PanOrbitCamera {
            focus: pose.focus,
            radius: Some(pose.radius),
            yaw: Some(pose.yaw),
            pitch: Some(pose.pitch),
            // Rotation only; the rig is pinned to the ship.
            pan_sensitivity: 0.0,
            zoom_sensitivity: 0.0,
            enabled: false,
            force_update: true,
            ..default()
        },
        ChaseCamera,
        Tonemapping::TonyMcMapface,
        pose.transform(),
        Name::new("Chase Camera"),
    ));
}

/// Map `1`/`2` key presses onto the camera mode
pub fn switch_camera_mode(mut keys: MessageReader<KeyboardInput>, mut mode: ResMut<CameraMode>) {
    for event in keys.read() {
        if !event.state.is_pressed() {
            continue;
        }
        if let Some(next) = CameraMode::from_key(event.key_code) {
            mode.set_if_neq(next);
        }
    }
}

fn hand_over(camera: &mut Camera, controls: &mut PanOrbitCamera, live: bool) {
    camera.is_active = live;
    camera.order = if live { LIVE_ORDER } else { STANDBY_ORDER };
    controls.enabled = live;
}

/// Activate the selected camera and hand it the pointer controls
pub fn apply_camera_mode(
    mode: Res<CameraMode>,
    mut orbit: Query<(&mut Camera, &mut PanOrbitCamera), (With<OrbitCamera>, Without<ChaseCamera>)>,
    mut chase: Query<(&mut Camera, &mut PanOrbitCamera), (With<ChaseCamera>, Without<OrbitCamera>)>,
) {
    let flags = mode.controls();
    for (mut camera, mut controls) in orbit.iter_mut() {
        hand_over(&mut camera, &mut controls, flags.orbit);
    }
    for (mut camera, mut controls) in chase.iter_mut() {
        hand_over(&mut camera, &mut controls, flags.chase);
    }
    info!("Camera mode: {}", mode.label());
}

/// Pin the chase camera to the spaceship at the configured offset
pub fn follow_spaceship(
    config: Res<ChaseCameraConfig>,
    ships: Query<&Transform, (With<Spaceship>, Without<ChaseCamera>)>,
    mut cameras: Query<(&mut PanOrbitCamera, &mut Transform), With<ChaseCamera>>,
) {
    let Ok(ship) = ships.single() else {
        return;
    };
    let pose = ChasePose::new(ship.translation, config.offset);
    for (mut controls, mut transform) in cameras.iter_mut() {
        pose.apply(&mut controls);
        *transform = pose.transform();
    }
}
