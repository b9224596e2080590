//! Static table of the scene's celestial bodies.
//!
//! Sizes and distances are display units, not astronomical ones.

use bevy::math::Vec3;

/// Fixed point every orbit is centered on. The Sun sits here.
pub const ORBIT_CENTER: Vec3 = Vec3::new(640.0, 320.0, 0.0);

/// World point every planetary ring faces.
pub const RING_FACING_POINT: Vec3 = Vec3::new(640.0, 1500.0, 0.0);

pub const PLANET_SPIN: f32 = 0.01;
pub const SUN_SPIN: f32 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub name: &'static str,
    pub radius: f32,
    pub orbit_radius: f32,
    /// Multiplier applied to the global orbit angle.
    pub orbit_speed_factor: f32,
    /// Spin increment per frame, in radians.
    pub spin_speed: f32,
    pub texture: &'static str,
    /// Self-lit bodies ignore scene lighting.
    pub unlit: bool,
    pub ring: Option<RingSpec>,
}

const fn planet(
    name: &'static str,
    radius: f32,
    orbit_radius: f32,
    orbit_speed_factor: f32,
    texture: &'static str,
) -> BodySpec {
    BodySpec {
        name,
        radius,
        orbit_radius,
        orbit_speed_factor,
        spin_speed: PLANET_SPIN,
        texture,
        unlit: false,
        ring: None,
    }
}

const fn with_ring(
    body: BodySpec,
    inner_radius: f32,
    outer_radius: f32,
    texture: &'static str,
) -> BodySpec {
    BodySpec {
        ring: Some(RingSpec {
            inner_radius,
            outer_radius,
            texture,
        }),
        ..body
    }
}

pub const BODIES: &[BodySpec] = &[
    BodySpec {
        name: "Sun",
        radius: 40.0,
        orbit_radius: 0.0,
        orbit_speed_factor: 0.0,
        spin_speed: SUN_SPIN,
        texture: "textures/sun.jpg",
        unlit: true,
        ring: None,
    },
    planet("Mercury", 3.2, 58.0, 1.5, "textures/mercury.jpg"),
    planet("Venus", 4.8, 80.0, 1.2, "textures/venus.jpg"),
    planet("Earth", 4.8, 100.0, 1.0, "textures/earth.jpg"),
    planet("Mars", 4.0, 130.0, 0.9, "textures/mars.jpg"),
    planet("Jupiter", 13.0, 175.0, 0.5, "textures/jupiter.jpg"),
    with_ring(
        planet("Saturn", 10.0, 240.0, 0.3, "textures/saturn.jpg"),
        16.0,
        32.0,
        "textures/saturn_ring.png",
    ),
    with_ring(
        planet("Uranus", 8.0, 280.0, 0.2, "textures/uranus.jpg"),
        16.0,
        20.0,
        "textures/uranus_ring.png",
    ),
    planet("Neptune", 6.0, 320.0, 0.1, "textures/neptune.jpg"),
];

/// Body the satellite circles.
pub const SATELLITE_HOST: &str = "Earth";
pub const SATELLITE_DISTANCE: f32 = 8.0;

pub fn find_body(name: &str) -> Option<&'static BodySpec> {
    BODIES.iter().find(|b| b.name == name)
}
