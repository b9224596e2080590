//! Short-lived floating name labels
//!
//! Each label is world-space text: a small 2D camera draws the name into an
//! image, and that image is shown on a quad which is turned toward the orbit
//! camera every frame.

use std::time::Duration;

use bevy::camera::RenderTarget;
use bevy::light::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::render_resource::TextureFormat;
use bevy::ui::UiTargetCamera;

use crate::camera::OrbitCamera;
use crate::config::LabelConfig;
use crate::core::{AssetStatus, Deferred, poll_load};
use crate::interaction::{HoverEntered, Hoverable};

/// Label cameras render before any on-screen camera.
const LABEL_CAMERA_ORDER: isize = -1;

/// Font shared by every label
#[derive(Resource, Default)]
pub struct LabelFont {
    pub handle: Handle<Font>,
    pub status: AssetStatus,
}

/// World-space anchor of a label. Turned to face the orbit camera every frame.
#[derive(Component, Debug, Clone)]
pub struct FloatingLabel {
    pub text: String,
    /// App time at which the label appeared.
    pub created_at: Duration,
}

/// Marker for the textured quad that shows a label's text
#[derive(Component)]
pub struct LabelQuad;

/// The entities that make up one visible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveLabel {
    /// Carries the quad as a child.
    pub anchor: Entity,
    pub camera: Entity,
    pub node: Entity,
}

impl LiveLabel {
    fn despawn(self, commands: &mut Commands) {
        for entity in [self.anchor, self.camera, self.node] {
            commands.entity(entity).try_despawn();
        }
    }
}

/// Holds the single live label and its pending removal.
#[derive(Resource, Default)]
pub struct LabelSlot {
    current: Option<LiveLabel>,
    removals: Deferred<Entity>,
}

impl LabelSlot {
    pub fn current(&self) -> Option<LiveLabel> {
        self.current
    }

    /// Install `label` and schedule its removal. Returns the label it displaces,
    /// whose own removal is voided.
    pub fn replace(&mut self, label: LiveLabel, lifetime: Duration) -> Option<LiveLabel> {
        let previous = self.current.replace(label);
        if let Some(previous) = previous {
            self.removals.invalidate(previous.anchor);
        }
        self.removals.schedule(label.anchor, lifetime);
        previous
    }

    /// Advance the removal timer; yields the label once its time is up.
    pub fn expire(&mut self, delta: Duration) -> Option<LiveLabel> {
        let fired = self.removals.tick(delta);
        let current = self.current?;
        if fired.contains(&current.anchor) {
            self.current = None;
            Some(current)
        } else {
            None
        }
    }
}

/// Where a label sits relative to the object it names.
pub fn label_anchor(position: Vec3, shape: Hoverable, config: &LabelConfig) -> Vec3 {
    let lift = match shape {
        Hoverable::Sphere { radius } => radius + config.vertical_margin,
        Hoverable::Irregular => 0.0,
    };
    position + Vec3::new(config.horizontal_shift, lift, 0.0)
}

/// Offset of the quad's center from the anchor, in the anchor's frame.
///
/// The text starts at the anchor and runs along local +X with its baseline on
/// the anchor, so the quad extends right and up from it.
pub fn quad_offset(size: Vec2) -> Vec3 {
    (size / 2.0).extend(0.0)
}

pub fn load_label_font(
    asset_server: Res<AssetServer>,
    config: Res<LabelConfig>,
    mut font: ResMut<LabelFont>,
) {
    font.handle = asset_server.load(config.font_path);
}

pub fn poll_label_font(asset_server: Res<AssetServer>, mut font: ResMut<LabelFont>) {
    if font.status != AssetStatus::Pending {
        return;
    }
    let poll = poll_load(&asset_server, font.handle.id(), "label font");
    font.status.settle(poll, "label font");
}

/// Show a label for each newly hovered object
#[allow(clippy::too_many_arguments)]
pub fn present_labels(
    mut commands: Commands,
    mut entered: MessageReader<HoverEntered>,
    font: Res<LabelFont>,
    config: Res<LabelConfig>,
    time: Res<Time>,
    targets: Query<(&GlobalTransform, &Hoverable, Option<&Name>)>,
    mut images: ResMut<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut slot: ResMut<LabelSlot>,
) {
    let Some(event) = entered.read().last() else {
        return;
    };
    match font.status {
        AssetStatus::Ready => {}
        AssetStatus::Pending => {
            warn!("Label font not loaded yet; dropping label");
            return;
        }
        AssetStatus::Failed => return,
    }
    let Ok((transform, shape, name)) = targets.get(event.target) else {
        return;
    };
    let text = name.map(Name::as_str).unwrap_or("Object").to_string();

    let pixels = config.texture_size;
    let image = images.add(Image::new_target_texture(
        pixels.x,
        pixels.y,
        TextureFormat::Rgba8UnormSrgb,
        None,
    ));
    let camera = commands
        .spawn((
            Camera2d,
            Camera {
                order: LABEL_CAMERA_ORDER,
                clear_color: ClearColorConfig::Custom(Color::NONE),
                ..default()
            },
            RenderTarget::Image(image.clone().into()),
            Name::new(format!("{text} Label Camera")),
        ))
        .id();
    let node = commands
        .spawn((
            Text::new(text.clone()),
            TextFont {
                font: font.handle.clone(),
                font_size: config.font_size,
                ..default()
            },
            TextColor(config.color),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                bottom: Val::Px(0.0),
                ..default()
            },
            UiTargetCamera(camera),
            Name::new(format!("{text} Label Text")),
        ))
        .id();

    let size = pixels.as_vec2();
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(image),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let anchor = commands
        .spawn((
            Transform::from_translation(label_anchor(transform.translation(), *shape, &config)),
            Visibility::default(),
            FloatingLabel {
                text: text.clone(),
                created_at: time.elapsed(),
            },
            Name::new(format!("{text} Label")),
        ))
        .with_child((
            Mesh3d(meshes.add(Rectangle::from_size(size))),
            MeshMaterial3d(material),
            Transform::from_translation(quad_offset(size)),
            NotShadowCaster,
            LabelQuad,
        ))
        .id();

    if let Some(old) = slot.replace(LiveLabel { anchor, camera, node }, config.lifetime) {
        old.despawn(&mut commands);
    }
    debug!("Label shown: {text}");
}

/// Remove the live label once its lifetime runs out
pub fn expire_labels(
    mut commands: Commands,
    time: Res<Time>,
    labels: Query<&FloatingLabel>,
    mut slot: ResMut<LabelSlot>,
) {
    let Some(expired) = slot.expire(time.delta()) else {
        return;
    };
    if let Ok(label) = labels.get(expired.anchor) {
        let age = time.elapsed().saturating_sub(label.created_at);
        debug!("Label {} removed after {:.2}s", label.text, age.as_secs_f32());
    }
    expired.despawn(&mut commands);
}

/// Turn label anchors toward the orbit camera, whichever camera is rendering
pub fn orient_labels(
    cameras: Query<&GlobalTransform, With<OrbitCamera>>,
    mut labels: Query<&mut Transform, With<FloatingLabel>>,
) {
    let Ok(camera) = cameras.single() else {
        return;
    };
    let eye = camera.translation();
    for mut transform in labels.iter_mut() {
        // Back (+Z), the quad's front face, toward the camera.
        let away = transform.translation - eye;
        transform.look_to(away, Vec3::Y);
    }
}
