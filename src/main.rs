use bevy::light::GlobalAmbientLight;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod camera;
mod config;
mod core;
mod interaction;
mod spaceship;
mod ui;

use bodies::BodiesPlugin;
use bodies::catalog::ORBIT_CENTER;
use camera::CameraPlugin;
use core::FrameSet;
use interaction::InteractionPlugin;
use spaceship::SpaceshipPlugin;
use ui::{SkyboxPlugin, UiPlugin};

const SUN_LIGHT_INTENSITY: f32 = 2.0e9;
const SUN_LIGHT_RANGE: f32 = 1280.0;

// Lights that do not belong to any single body
fn setup(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: 80.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: SUN_LIGHT_INTENSITY,
            range: SUN_LIGHT_RANGE,
            radius: 16.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(ORBIT_CENTER),
        Name::new("Sun Light"),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Bevy Solar System".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "info,wgpu=error,naga=warn,bevysolar=debug".to_string(),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.configure_sets(
        Update,
        (
            FrameSet::Input,
            FrameSet::Animate,
            FrameSet::Motion,
            FrameSet::Follow,
            FrameSet::Interaction,
        )
            .chain(),
    );

    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(BodiesPlugin);
    app.add_plugins(SpaceshipPlugin);
    app.add_plugins(CameraPlugin);
    app.add_plugins(InteractionPlugin);
    app.add_plugins(SkyboxPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
