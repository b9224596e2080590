//! Spaceship loading, keyboard integration and spotlight tracking

use bevy::gltf::Gltf;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::config::MotionConfig;
use crate::core::{AssetStatus, poll_load};
use crate::interaction::Hoverable;
use crate::spaceship::input::{Movement, MovementInput};

/// Marker component for the controllable spaceship root
#[derive(Component)]
pub struct Spaceship;

/// Marker component for the light that follows the spaceship
#[derive(Component)]
pub struct ShipSpotlight;

/// In-flight spaceship model load.
///
/// A parse failure only marks the base `Gltf` handle failed, so that is the
/// handle polled; the scene handle is what gets spawned.
#[derive(Resource)]
pub struct SpaceshipAsset {
    pub gltf: Handle<Gltf>,
    pub scene: Handle<Scene>,
    pub status: AssetStatus,
}

/// Kick off the asynchronous model load
pub fn load_spaceship(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<MotionConfig>,
) {
    let gltf = asset_server.load(config.model_path);
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(config.model_path));
    commands.insert_resource(SpaceshipAsset {
        gltf,
        scene,
        status: AssetStatus::Pending,
    });
}

/// Spawn the spaceship and its spotlight once the model is available.
///
/// A failed load leaves both absent for the rest of the session.
pub fn spawn_spaceship_when_loaded(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<MotionConfig>,
    mut asset: ResMut<SpaceshipAsset>,
) {
    let poll = poll_load(&asset_server, asset.gltf.id(), "spaceship model");
    if !asset.status.settle(poll, "spaceship model") || !asset.status.is_ready() {
        return;
    }

    let start = config.start;
    commands.spawn((
        SceneRoot(asset.scene.clone()),
        Transform::from_translation(start),
        Spaceship,
        Hoverable::Irregular,
        Name::new("Spaceship"),
    ));

    commands.spawn((
        SpotLight {
            intensity: config.spotlight_intensity,
            range: config.spotlight_range,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(start + Vec3::Y * config.spotlight_height)
            .looking_at(start, Vec3::Z),
        ShipSpotlight,
        Name::new("Ship Spotlight"),
    ));

    info!("Spaceship spawned at {start}");
}

/// Fold key press/release events into the movement flags
pub fn track_movement_keys(
    mut keys: MessageReader<KeyboardInput>,
    mut input: ResMut<MovementInput>,
) {
    for event in keys.read() {
        if let Some(movement) = Movement::from_key(event.key_code) {
            input.set(movement, event.state.is_pressed());
        }
    }
}

/// Translate the spaceship along the held directions at constant speed
pub fn move_spaceship(
    input: Res<MovementInput>,
    config: Res<MotionConfig>,
    mut ships: Query<&mut Transform, With<Spaceship>>,
) {
    let step = input.step(config.speed);
    if step == Vec3::ZERO {
        return;
    }
    for mut transform in ships.iter_mut() {
        let world_step = transform.rotation * step;
        transform.translation += world_step;
    }
}

/// Keep the spotlight above the spaceship, aimed at it
pub fn follow_spotlight(
    config: Res<MotionConfig>,
    ships: Query<&Transform, With<Spaceship>>,
    mut lights: Query<&mut Transform, (With<ShipSpotlight>, Without<Spaceship>)>,
) {
    let Ok(ship) = ships.single() else {
        return;
    };
    for mut transform in lights.iter_mut() {
        *transform = Transform::from_translation(
            ship.translation + Vec3::Y * config.spotlight_height,
        )
        .looking_at(ship.translation, Vec3::Z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn world_with_ship(input: MovementInput) -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(input);
        world.init_resource::<MotionConfig>();
        let start = world.resource::<MotionConfig>().start;
        let ship = world
            .spawn((Transform::from_translation(start), Spaceship))
            .id();
        (world, ship)
    }

    #[test]
    fn forward_right_moves_exactly_speed() {
        let input = MovementInput {
            forward: true,
            right: true,
            ..default()
        };
        let (mut world, ship) = world_with_ship(input);
        let before = world.get::<Transform>(ship).expect("ship").translation;

        world.run_system_once(move_spaceship).expect("move");

        let after = world.get::<Transform>(ship).expect("ship").translation;
        let speed = world.resource::<MotionConfig>().speed;
        assert!(((after - before).length() - speed).abs() < 1e-5);
    }

    #[test]
    fn releasing_keys_halts_next_frame() {
        let input = MovementInput {
            forward: true,
            ..default()
        };
        let (mut world, ship) = world_with_ship(input);
        world.run_system_once(move_spaceship).expect("move");

        world.insert_resource(MovementInput::default());
        let held_at = world.get::<Transform>(ship).expect("ship").translation;
        world.run_system_once(move_spaceship).expect("move");
        assert_eq!(
            world.get::<Transform>(ship).expect("ship").translation,
            held_at
        );
    }

    #[test]
    fn movement_follows_ship_orientation() {
        let input = MovementInput {
            forward: true,
            ..default()
        };
        let (mut world, ship) = world_with_ship(input);
        world
            .get_mut::<Transform>(ship)
            .expect("ship")
            .rotate_y(std::f32::consts::FRAC_PI_2);
        let before = world.get::<Transform>(ship).expect("ship").translation;

        world.run_system_once(move_spaceship).expect("move");

        // Local +Z turned a quarter about Y points along world +X.
        let delta = world.get::<Transform>(ship).expect("ship").translation - before;
        assert!((delta - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn spotlight_hovers_above_ship() {
        let (mut world, ship) = world_with_ship(MovementInput::default());
        let light = world.spawn((Transform::default(), ShipSpotlight)).id();

        world.run_system_once(follow_spotlight).expect("spotlight");

        let ship_pos = world.get::<Transform>(ship).expect("ship").translation;
        let light = world.get::<Transform>(light).expect("light");
        assert!((light.translation - (ship_pos + Vec3::Y * 6.0)).length() < 1e-5);
        assert!(light.forward().dot(Vec3::NEG_Y) > 0.999);
    }

    #[test]
    fn unreadable_model_settles_as_failed() {
        use bevy::asset::{AssetApp, AssetPlugin};
        use std::time::Duration;

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Gltf>()
            .init_asset::<Scene>()
            .insert_resource(MotionConfig {
                model_path: "models/missing/scene.gltf",
                ..default()
            })
            .add_systems(Startup, load_spaceship)
            .add_systems(Update, spawn_spaceship_when_loaded);

        for _ in 0..500 {
            app.update();
            if app.world().resource::<SpaceshipAsset>().status != AssetStatus::Pending {
                break;
            }
            std::thread::sleep(Duration::from_millis(2));
        }

        let world = app.world_mut();
        assert_eq!(
            world.resource::<SpaceshipAsset>().status,
            AssetStatus::Failed
        );
        assert_eq!(world.query::<&Spaceship>().iter(world).count(), 0);
    }
}
