//! Body spawning and per-frame orbit, spin and satellite updates

use std::f32::consts::FRAC_PI_2;

use bevy::light::NotShadowCaster;
use bevy::prelude::*;

use crate::bodies::catalog::{
    BODIES, BodySpec, ORBIT_CENTER, RING_FACING_POINT, SATELLITE_DISTANCE, SATELLITE_HOST,
};
use crate::bodies::components::{CelestialBody, Orbit, PlanetRing, Satellite, SelfRotation};
use crate::bodies::orbit::{OrbitClock, orbit_position, satellite_position};
use crate::interaction::Hoverable;

const SPHERE_SECTORS: u32 = 50;
const SPHERE_STACKS: u32 = 50;

/// Spawn the sun, the planets, their rings and the satellite
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let mut satellite_host = None;

    for spec in BODIES {
        let position = orbit_position(ORBIT_CENTER, spec.orbit_radius, spec.orbit_speed_factor, 0.0);
        let entity = spawn_body(
            &mut commands,
            &mut meshes,
            &mut materials,
            &asset_server,
            spec,
            position,
        );

        if let Some(ring) = spec.ring {
            let material = materials.add(StandardMaterial {
                base_color: Color::WHITE,
                base_color_texture: Some(asset_server.load(ring.texture)),
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                ..default()
            });
            commands.spawn((
                Mesh3d(meshes.add(Annulus::new(ring.inner_radius, ring.outer_radius))),
                MeshMaterial3d(material),
                Transform::from_translation(position).looking_at(RING_FACING_POINT, Vec3::Y),
                PlanetRing { parent: entity },
                NotShadowCaster,
                Name::new(format!("{} Ring", spec.name)),
            ));
        }

        if spec.name == SATELLITE_HOST {
            satellite_host = Some((entity, position));
        }
    }

    let Some((host, host_position)) = satellite_host else {
        warn!("spawn_bodies: satellite host {SATELLITE_HOST} not found");
        return;
    };

    commands.spawn((
        Mesh3d(meshes.add(ConicalFrustum {
            radius_top: 1.0,
            radius_bottom: 0.5,
            height: 0.4,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xCC, 0xCC, 0xCC),
            metallic: 0.5,
            perceptual_roughness: 0.5,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        Transform::from_translation(satellite_position(host_position, SATELLITE_DISTANCE, 0.0))
            .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        Satellite {
            host,
            distance: SATELLITE_DISTANCE,
        },
        Hoverable::Irregular,
        NotShadowCaster,
        Name::new("Satellite"),
    ));

    info!("Spawned {} celestial bodies", BODIES.len());
}

fn spawn_body(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    spec: &BodySpec,
    position: Vec3,
) -> Entity {
    // Each body owns its material so hover tinting stays local to it.
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(asset_server.load(spec.texture)),
        unlit: spec.unlit,
        perceptual_roughness: 1.0,
        ..default()
    });

    let mut entity = commands.spawn((
        Mesh3d(meshes.add(Sphere::new(spec.radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS))),
        MeshMaterial3d(material),
        Transform::from_translation(position),
        CelestialBody {
            radius: spec.radius,
        },
        Orbit {
            radius: spec.orbit_radius,
            speed_factor: spec.orbit_speed_factor,
        },
        SelfRotation::new(spec.spin_speed),
        Hoverable::Sphere {
            radius: spec.radius,
        },
        Name::new(spec.name),
    ));
    // The sun holds the scene's point light; it must not shadow itself.
    if spec.unlit {
        entity.insert(NotShadowCaster);
    }
    entity.id()
}

/// Advance the shared orbit angle by one fixed step
pub fn advance_orbit_clock(mut clock: ResMut<OrbitClock>) {
    clock.advance();
}

/// Place every orbiting body on its circle for the current angle
pub fn update_orbits(clock: Res<OrbitClock>, mut bodies: Query<(&Orbit, &mut Transform)>) {
    let angle = clock.angle();
    for (orbit, mut transform) in bodies.iter_mut() {
        transform.translation =
            orbit_position(ORBIT_CENTER, orbit.radius, orbit.speed_factor, angle);
    }
}

/// Keep rings on their parent body, facing the fixed world point
pub fn update_rings(
    mut rings: Query<(&PlanetRing, &mut Transform)>,
    bodies: Query<&Transform, (With<CelestialBody>, Without<PlanetRing>)>,
) {
    for (ring, mut transform) in rings.iter_mut() {
        let Ok(parent) = bodies.get(ring.parent) else {
            continue;
        };
        transform.translation = parent.translation;
        transform.look_at(RING_FACING_POINT, Vec3::Y);
    }
}

/// Advance each body's spin by its active per-frame speed
pub fn spin_bodies(mut bodies: Query<(&mut SelfRotation, &mut Transform)>) {
    for (mut spin, mut transform) in bodies.iter_mut() {
        spin.advance();
        transform.rotation = Quat::from_rotation_y(spin.angle);
    }
}

/// Move satellites around their host in step with the host's spin
pub fn update_satellites(
    mut satellites: Query<(&Satellite, &mut Transform)>,
    hosts: Query<(&Transform, &SelfRotation), Without<Satellite>>,
) {
    for (satellite, mut transform) in satellites.iter_mut() {
        let Ok((host, spin)) = hosts.get(satellite.host) else {
            continue;
        };
        transform.translation = satellite_position(host.translation, satellite.distance, spin.angle);
    }
}
