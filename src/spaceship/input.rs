//! Keyboard movement state for the spaceship

use bevy::prelude::*;

/// One of the six movement directions bound to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Movement {
    /// Physical key bindings. Key codes ignore shift/caps state.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyW => Some(Movement::Forward),
            KeyCode::KeyS => Some(Movement::Backward),
            KeyCode::KeyA => Some(Movement::Left),
            KeyCode::KeyD => Some(Movement::Right),
            KeyCode::KeyE => Some(Movement::Up),
            KeyCode::KeyQ => Some(Movement::Down),
            _ => None,
        }
    }

    /// Unit contribution in the ship's local frame.
    pub fn axis(self) -> Vec3 {
        match self {
            Movement::Forward => Vec3::Z,
            Movement::Backward => Vec3::NEG_Z,
            Movement::Left => Vec3::X,
            Movement::Right => Vec3::NEG_X,
            Movement::Up => Vec3::Y,
            Movement::Down => Vec3::NEG_Y,
        }
    }
}

/// Held movement keys. Only key press/release events mutate it.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementInput {
    pub fn set(&mut self, movement: Movement, held: bool) {
        let flag = match movement {
            Movement::Forward => &mut self.forward,
            Movement::Backward => &mut self.backward,
            Movement::Left => &mut self.left,
            Movement::Right => &mut self.right,
            Movement::Up => &mut self.up,
            Movement::Down => &mut self.down,
        };
        *flag = held;
    }

    fn held(&self) -> impl Iterator<Item = Movement> + '_ {
        [
            (self.forward, Movement::Forward),
            (self.backward, Movement::Backward),
            (self.left, Movement::Left),
            (self.right, Movement::Right),
            (self.up, Movement::Up),
            (self.down, Movement::Down),
        ]
        .into_iter()
        .filter_map(|(held, movement)| held.then_some(movement))
    }

    /// Normalized sum of the held directions, or zero when they cancel out.
    pub fn direction(&self) -> Vec3 {
        self.held()
            .map(Movement::axis)
            .sum::<Vec3>()
            .normalize_or_zero()
    }

    /// Local-space translation for one frame at `speed`.
    pub fn step(&self, speed: f32) -> Vec3 {
        self.direction() * speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(movements: &[Movement]) -> MovementInput {
        let mut input = MovementInput::default();
        for m in movements {
            input.set(*m, true);
        }
        input
    }

    #[test]
    fn bindings_cover_six_keys() {
        let keys = [
            KeyCode::KeyW,
            KeyCode::KeyS,
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyE,
            KeyCode::KeyQ,
        ];
        for key in keys {
            assert!(Movement::from_key(key).is_some());
        }
        assert_eq!(Movement::from_key(KeyCode::Digit1), None);
        assert_eq!(Movement::from_key(KeyCode::Space), None);
    }

    #[test]
    fn press_and_release_toggle_flags() {
        let mut input = MovementInput::default();
        input.set(Movement::Forward, true);
        input.set(Movement::Forward, true);
        assert!(input.forward);
        input.set(Movement::Forward, false);
        assert_eq!(input, MovementInput::default());
    }

    #[test]
    fn diagonal_is_normalized() {
        let input = held(&[Movement::Forward, Movement::Right]);
        let step = input.step(0.5);
        assert!((step.length() - 0.5).abs() < 1e-6);
        assert!(step.z > 0.0 && step.x < 0.0);
    }

    #[test]
    fn three_axes_still_move_at_speed() {
        let input = held(&[Movement::Forward, Movement::Left, Movement::Up]);
        assert!((input.step(0.5).length() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn opposite_keys_cancel() {
        let input = held(&[Movement::Up, Movement::Down]);
        assert_eq!(input.step(0.5), Vec3::ZERO);
    }

    #[test]
    fn idle_input_does_not_move() {
        assert_eq!(MovementInput::default().step(0.5), Vec3::ZERO);
    }
}
