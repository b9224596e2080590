//! Pointer interaction module
//!
//! Hovering an object tints it and pops up its name; clicking a hovered
//! body spins it faster for a moment.

use bevy::prelude::*;

use crate::config::{HighlightConfig, LabelConfig};
use crate::core::FrameSet;

pub mod boost;
pub mod hover;
pub mod label;

pub use boost::{RotationBoosts, boost_on_click, revert_boosts};
pub use hover::{HoverState, pick_hovered};
pub use label::{
    LabelFont, LabelQuad, LabelSlot, expire_labels, load_label_font, orient_labels,
    poll_label_font, present_labels,
};

/// Something the pointer can hover, and how its label is offset.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum Hoverable {
    Sphere { radius: f32 },
    Irregular,
}

/// Written when the pointer moves onto a new hoverable object
#[derive(Message, Debug, Clone, Copy)]
pub struct HoverEntered {
    pub target: Entity,
}

/// Plugin for hover highlighting, labels and click boosts
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<HoverEntered>()
            .init_resource::<HighlightConfig>()
            .init_resource::<LabelConfig>()
            .init_resource::<HoverState>()
            .init_resource::<RotationBoosts>()
            .init_resource::<LabelSlot>()
            .init_resource::<LabelFont>()
            .add_systems(Startup, load_label_font)
            .add_systems(
                Update,
                (
                    poll_label_font,
                    pick_hovered,
                    boost_on_click,
                    revert_boosts,
                    present_labels,
                    expire_labels,
                    orient_labels,
                )
                    .chain()
                    .in_set(FrameSet::Interaction),
            );
    }
}
