//! Overlay camera and the controls hint

use bevy::prelude::*;
use bevy::ui::IsDefaultUiCamera;

use crate::camera::CameraMode;

/// Marker for the camera that draws UI over whichever 3D view is active
#[derive(Component)]
pub struct OverlayCamera;

/// Marker for the controls hint text
#[derive(Component)]
pub struct HudText;

pub fn hud_text(mode: CameraMode) -> String {
    format!(
        "Camera: {} | [1] orbit  [2] chase | W/S/A/D/Q/E fly",
        mode.label()
    )
}

pub fn spawn_overlay(mut commands: Commands, mode: Res<CameraMode>) {
    commands.spawn((
        Camera2d,
        Camera {
            order: 2,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
        OverlayCamera,
        Name::new("Overlay Camera"),
    ));

    commands.spawn((
        Text::new(hud_text(*mode)),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            bottom: Val::Px(12.0),
            ..default()
        },
        HudText,
    ));
}

pub fn refresh_hud(mode: Res<CameraMode>, mut texts: Query<&mut Text, With<HudText>>) {
    for mut text in texts.iter_mut() {
        text.0 = hud_text(*mode);
    }
}
