//! Click-triggered temporary spin boosts

use std::time::Duration;

use bevy::prelude::*;

use crate::bodies::SelfRotation;
use crate::config::HighlightConfig;
use crate::core::Deferred;
use crate::interaction::Hoverable;
use crate::interaction::hover::{HoverState, resolve_hoverable};

/// Pending spin reverts, one live entry per boosted body.
#[derive(Resource, Default)]
pub struct RotationBoosts {
    reverts: Deferred<Entity>,
}

impl RotationBoosts {
    /// Boost `spin` now and (re)schedule its revert after `duration`.
    pub fn boost(
        &mut self,
        body: Entity,
        spin: &mut SelfRotation,
        increase: f32,
        duration: Duration,
    ) -> f32 {
        self.reverts.schedule(body, duration);
        spin.boost(increase)
    }

    /// Bodies whose latest boost has run its course.
    pub fn expired(&mut self, delta: Duration) -> Vec<Entity> {
        self.reverts.tick(delta)
    }

    pub fn is_boosted(&self, body: Entity) -> bool {
        self.reverts.is_pending(body)
    }
}

/// Boost the hovered body's spin on left click
pub fn boost_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    hover: Res<HoverState>,
    hoverables: Query<(), With<Hoverable>>,
    parents: Query<&ChildOf>,
    config: Res<HighlightConfig>,
    mut spins: Query<(&mut SelfRotation, Option<&Name>)>,
    mut boosts: ResMut<RotationBoosts>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(hovered) = hover.current() else {
        return;
    };
    let Some(target) = resolve_hoverable(hovered, &hoverables, &parents) else {
        return;
    };
    let Ok((mut spin, name)) = spins.get_mut(target) else {
        debug!("Clicked {target:?} has no spin to boost");
        return;
    };

    let speed = boosts.boost(
        target,
        &mut spin,
        config.boost_increase,
        config.boost_duration,
    );
    info!(
        "Boosted {} spin to {speed:.3}",
        name.map(Name::as_str).unwrap_or("body")
    );
}

/// Restore spins whose boost window has elapsed
pub fn revert_boosts(
    time: Res<Time>,
    mut boosts: ResMut<RotationBoosts>,
    mut spins: Query<&mut SelfRotation>,
) {
    for body in boosts.expired(time.delta()) {
        // The body may be gone; nothing to restore then.
        if let Ok(mut spin) = spins.get_mut(body) {
            spin.revert();
            debug!("Spin of {body:?} restored to {:.3}", spin.speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INCREASE: f32 = 0.05;
    const WINDOW: Duration = Duration::from_secs(1);

    fn body() -> Entity {
        World::new().spawn_empty().id()
    }

    #[test]
    fn click_raises_speed_by_exactly_the_increase() {
        let mut boosts = RotationBoosts::default();
        let mut spin = SelfRotation::new(0.01);
        let entity = body();

        let speed = boosts.boost(entity, &mut spin, INCREASE, WINDOW);

        assert!((speed - 0.06).abs() < 1e-7);
        assert!(boosts.is_boosted(entity));
    }

    #[test]
    fn reverts_to_baseline_after_window() {
        let mut boosts = RotationBoosts::default();
        let mut spin = SelfRotation::new(0.01);
        let entity = body();
        boosts.boost(entity, &mut spin, INCREASE, WINDOW);

        assert!(boosts.expired(Duration::from_millis(999)).is_empty());
        let expired = boosts.expired(Duration::from_millis(1));
        assert_eq!(expired, vec![entity]);

        spin.revert();
        assert_eq!(spin.speed, 0.01);
    }

    #[test]
    fn overlapping_clicks_extend_window_without_drift() {
        let mut boosts = RotationBoosts::default();
        let mut spin = SelfRotation::new(0.01);
        let entity = body();

        boosts.boost(entity, &mut spin, INCREASE, WINDOW);
        assert!(boosts.expired(Duration::from_millis(600)).is_empty());
        boosts.boost(entity, &mut spin, INCREASE, WINDOW);
        boosts.boost(entity, &mut spin, INCREASE, WINDOW);
        assert!((spin.speed - 0.06).abs() < 1e-7);

        // The first click's revert is stale by now.
        assert!(boosts.expired(Duration::from_millis(600)).is_empty());
        assert!((spin.speed - 0.06).abs() < 1e-7);

        assert_eq!(boosts.expired(Duration::from_millis(400)), vec![entity]);
        spin.revert();
        assert_eq!(spin.speed, 0.01);
        assert!(!boosts.is_boosted(entity));
    }
}
