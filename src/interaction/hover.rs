//! Pointer hover picking and highlight tinting

use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings, RayCastVisibility};
use bevy::prelude::*;
use bevy::window::CursorMoved;
use rand::Rng;

use crate::bodies::PlanetRing;
use crate::camera::OrbitCamera;
use crate::config::HighlightConfig;
use crate::interaction::{HoverEntered, Hoverable, LabelQuad};

/// Outcome of feeding one picking result into a [`HoverTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange<T> {
    Unchanged,
    Entered { previous: Option<T>, current: T },
    Left { previous: T },
}

/// Remembers at most one hovered object and reports transitions.
#[derive(Debug, Clone)]
pub struct HoverTracker<T> {
    current: Option<T>,
}

impl<T> Default for HoverTracker<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: Copy + PartialEq> HoverTracker<T> {
    pub fn current(&self) -> Option<T> {
        self.current
    }

    pub fn observe(&mut self, hit: Option<T>) -> HoverChange<T> {
        match (self.current, hit) {
            (Some(previous), Some(current)) if previous == current => HoverChange::Unchanged,
            (previous, Some(current)) => {
                self.current = Some(current);
                HoverChange::Entered { previous, current }
            }
            (Some(previous), None) => {
                self.current = None;
                HoverChange::Left { previous }
            }
            (None, None) => HoverChange::Unchanged,
        }
    }
}

/// The mesh entity currently under the pointer, if any.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct HoverState(pub HoverTracker<Entity>);

/// Uniformly random 24-bit RGB highlight color.
pub fn random_highlight(rng: &mut impl Rng) -> Color {
    let rgb: u32 = rng.random_range(0..=0x00FF_FFFF);
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Walk up the hierarchy from a hit mesh to the object that owns it.
pub fn resolve_hoverable(
    mut entity: Entity,
    hoverables: &Query<(), With<Hoverable>>,
    parents: &Query<&ChildOf>,
) -> Option<Entity> {
    loop {
        if hoverables.contains(entity) {
            return Some(entity);
        }
        entity = parents.get(entity).ok()?.parent();
    }
}

fn tint(
    entity: Entity,
    color: Color,
    handles: &Query<&MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
) {
    if let Ok(handle) = handles.get(entity)
        && let Some(mut material) = materials.get_mut(&handle.0)
    {
        material.base_color = color;
    }
}

/// Re-run picking from the orbit camera whenever the pointer moves, whichever
/// camera is rendering
#[allow(clippy::too_many_arguments)]
pub fn pick_hovered(
    mut cursor: MessageReader<CursorMoved>,
    cameras: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    mut ray_cast: MeshRayCast,
    see_through: Query<(), Or<(With<PlanetRing>, With<LabelQuad>)>>,
    hoverables: Query<(), With<Hoverable>>,
    parents: Query<&ChildOf>,
    handles: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<HighlightConfig>,
    mut hover: ResMut<HoverState>,
    mut entered: MessageWriter<HoverEntered>,
) {
    let Some(moved) = cursor.read().last() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, moved.position) else {
        return;
    };

    // Rings and labels are see-through for picking.
    let filter = |entity: Entity| !see_through.contains(entity);
    let settings = MeshRayCastSettings::default()
        .with_filter(&filter)
        .with_visibility(RayCastVisibility::Any);
    let hit = ray_cast
        .cast_ray(ray, &settings)
        .first()
        .map(|(entity, _)| *entity)
        .filter(|entity| resolve_hoverable(*entity, &hoverables, &parents).is_some());

    match hover.observe(hit) {
        HoverChange::Unchanged => {}
        HoverChange::Entered { previous, current } => {
            if let Some(previous) = previous {
                tint(previous, config.rest_color, &handles, &mut materials);
            }
            tint(current, random_highlight(&mut rand::rng()), &handles, &mut materials);
            if let Some(target) = resolve_hoverable(current, &hoverables, &parents) {
                entered.write(HoverEntered { target });
            }
        }
        HoverChange::Left { previous } => {
            tint(previous, config.rest_color, &handles, &mut materials);
        }
    }
}
