//! Scene tuning resources

use std::time::Duration;

use bevy::prelude::*;

/// Spaceship model, motion and spotlight settings
#[derive(Resource, Debug, Clone)]
pub struct MotionConfig {
    pub model_path: &'static str,
    pub start: Vec3,
    /// Distance travelled per frame while any movement key is held.
    pub speed: f32,
    pub spotlight_height: f32,
    pub spotlight_range: f32,
    pub spotlight_intensity: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            model_path: "models/spaceship/scene.gltf",
            start: Vec3::new(540.0, 320.0, 0.0),
            speed: 0.5,
            spotlight_height: 6.0,
            spotlight_range: 8.0,
            spotlight_intensity: 80_000.0,
        }
    }
}

/// Chase camera rig settings
#[derive(Resource, Debug, Clone)]
pub struct ChaseCameraConfig {
    /// Camera position relative to the spaceship.
    pub offset: Vec3,
    pub fov_deg: f32,
}

impl Default for ChaseCameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 16.0, -16.0),
            fov_deg: 90.0,
        }
    }
}

/// Hover highlight and click boost settings
#[derive(Resource, Debug, Clone)]
pub struct HighlightConfig {
    /// Color restored when an object stops being hovered.
    pub rest_color: Color,
    pub boost_increase: f32,
    pub boost_duration: Duration,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            rest_color: Color::WHITE,
            boost_increase: 0.05,
            boost_duration: Duration::from_secs(1),
        }
    }
}

/// Floating label settings
#[derive(Resource, Debug, Clone)]
pub struct LabelConfig {
    pub font_path: &'static str,
    pub font_size: f32,
    pub color: Color,
    pub lifetime: Duration,
    /// Gap between a sphere's surface and the label.
    pub vertical_margin: f32,
    pub horizontal_shift: f32,
    /// Pixel size of the texture the text is drawn into. One pixel spans one
    /// world unit on the label quad.
    pub texture_size: UVec2,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_path: "fonts/label.ttf",
            font_size: 40.0,
            color: Color::srgb_u8(0xFF, 0xA5, 0x00),
            lifetime: Duration::from_secs(2),
            vertical_margin: 2.0,
            horizontal_shift: -40.0,
            texture_size: UVec2::new(512, 64),
        }
    }
}
