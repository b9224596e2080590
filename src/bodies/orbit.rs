//! Circular-orbit math and the shared orbit angle.

use bevy::prelude::*;

/// Angle added to the global orbit angle every frame, in radians.
pub const ORBIT_STEP: f64 = 0.0025;

/// Global orbit angle, advanced once per frame regardless of frame time.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitClock {
    angle: f64,
    step: f64,
}

impl Default for OrbitClock {
    fn default() -> Self {
        Self::with_step(ORBIT_STEP)
    }
}

impl OrbitClock {
    pub fn with_step(step: f64) -> Self {
        Self { angle: 0.0, step }
    }

    pub fn advance(&mut self) {
        self.angle += self.step;
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Position on a horizontal circle around `center` for the given orbit angle.
pub fn orbit_position(center: Vec3, orbit_radius: f32, speed_factor: f32, angle: f64) -> Vec3 {
    let theta = (angle * speed_factor as f64) as f32;
    Vec3::new(
        center.x + orbit_radius * theta.cos(),
        center.y,
        center.z + orbit_radius * theta.sin(),
    )
}

/// Position of a small body circling `host` at `distance`, driven by the host's spin.
pub fn satellite_position(host: Vec3, distance: f32, host_spin: f32) -> Vec3 {
    Vec3::new(
        host.x + distance * host_spin.cos(),
        host.y,
        host.z + distance * host_spin.sin(),
    )
}

/// Horizontal distance from `center`, ignoring height.
pub fn planar_distance(center: Vec3, position: Vec3) -> f32 {
    Vec2::new(position.x - center.x, position.z - center.z).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Vec3 = Vec3::new(640.0, 320.0, 0.0);

    #[test]
    fn angle_after_n_frames() {
        let mut clock = OrbitClock::default();
        for _ in 0..1000 {
            clock.advance();
        }
        assert!((clock.angle() - 1000.0 * ORBIT_STEP).abs() < 1e-9);
    }

    #[test]
    fn zero_angle_starts_on_positive_x() {
        let p = orbit_position(CENTER, 100.0, 1.0, 0.0);
        assert!((p - Vec3::new(740.0, 320.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn stays_on_circle_in_orbital_plane() {
        let mut clock = OrbitClock::default();
        for frame in 0..5000 {
            clock.advance();
            if frame % 250 != 0 {
                continue;
            }
            for (radius, factor) in [(58.0, 1.5), (175.0, 0.5), (320.0, 0.1)] {
                let p = orbit_position(CENTER, radius, factor, clock.angle());
                assert!((planar_distance(CENTER, p) - radius).abs() < 1e-3);
                assert_eq!(p.y, CENTER.y);
            }
        }
    }

    #[test]
    fn zero_radius_stays_at_center() {
        let p = orbit_position(CENTER, 0.0, 0.0, 12.5);
        assert_eq!(p, CENTER);
    }

    #[test]
    fn speed_factor_scales_angular_progress() {
        let angle = std::f64::consts::FRAC_PI_2;
        let fast = orbit_position(Vec3::ZERO, 1.0, 2.0, angle);
        // Half a turn for the fast body, a quarter for the slow one.
        assert!((fast - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
        let slow = orbit_position(Vec3::ZERO, 1.0, 1.0, angle);
        assert!((slow - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn satellite_keeps_its_distance() {
        let host = Vec3::new(740.0, 320.0, 0.0);
        for spin in [0.0_f32, 0.7, 2.5, 9.1] {
            let p = satellite_position(host, 8.0, spin);
            assert!((p.distance(host) - 8.0).abs() < 1e-4);
        }
    }
}
