use anyhow::{anyhow, ensure};
use bevy::asset::RenderAssetUsages;
use bevy::core_pipeline::Skybox;
use bevy::{
    prelude::*,
    render::render_resource::{
        Extent3d, TextureDimension, TextureViewDescriptor, TextureViewDimension,
    },
};

use crate::core::{AssetStatus, poll_load};

/// Face images in cubemap layer order: +X, -X, +Y, -Y, +Z, -Z.
pub const SKYBOX_FACES: [&str; 6] = [
    "skybox/right.png",
    "skybox/left.png",
    "skybox/top.png",
    "skybox/bottom.png",
    "skybox/front.png",
    "skybox/back.png",
];

const SKYBOX_BRIGHTNESS: f32 = 1000.0;

pub struct SkyboxPlugin;

impl Plugin for SkyboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_skybox)
            .add_systems(Update, (build_cubemap, attach_skybox).chain());
    }
}

#[derive(Resource)]
pub struct Cubemap {
    pub faces: [Handle<Image>; 6],
    pub status: AssetStatus,
    pub image_handle: Option<Handle<Image>>,
}

fn load_skybox(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(Cubemap {
        faces: SKYBOX_FACES.map(|path| asset_server.load(path)),
        status: AssetStatus::Pending,
        image_handle: None,
    });
}

/// Stack six equally sized face images into one cube texture.
pub fn stack_faces(faces: &[&Image]) -> anyhow::Result<Image> {
    ensure!(faces.len() == 6, "skybox needs 6 faces, got {}", faces.len());
    let first = faces[0];
    let size = first.size();
    let format = first.texture_descriptor.format;

    let mut data = Vec::new();
    for (face, path) in faces.iter().zip(SKYBOX_FACES) {
        ensure!(
            face.size() == size,
            "{path} is {}x{}, expected {}x{}",
            face.width(),
            face.height(),
            size.x,
            size.y
        );
        ensure!(
            face.texture_descriptor.format == format,
            "{path} has pixel format {:?}, expected {format:?}",
            face.texture_descriptor.format
        );
        let bytes = face
            .data
            .as_ref()
            .ok_or_else(|| anyhow!("{path} has no pixel data"))?;
        data.extend_from_slice(bytes);
    }

    let mut image = Image::new(
        Extent3d {
            width: size.x,
            height: size.y * 6,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        format,
        RenderAssetUsages::default(),
    );
    image
        .reinterpret_stacked_2d_as_array(6)
        .map_err(|err| anyhow!("cannot reinterpret skybox as cubemap: {err:?}"))?;
    image.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });
    Ok(image)
}

fn build_cubemap(
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut cubemap: ResMut<Cubemap>,
) {
    if cubemap.status != AssetStatus::Pending {
        return;
    }
    let poll = cubemap
        .faces
        .iter()
        .zip(SKYBOX_FACES)
        .try_fold(true, |all, (face, path)| {
            Ok::<_, anyhow::Error>(poll_load(&asset_server, face.id(), path)? && all)
        });
    if !cubemap.status.settle(poll, "skybox") || !cubemap.status.is_ready() {
        return;
    }

    let stacked = {
        let faces: Option<Vec<&Image>> = cubemap.faces.iter().map(|h| images.get(h)).collect();
        faces
            .ok_or_else(|| anyhow!("skybox face missing after load"))
            .and_then(|faces| stack_faces(&faces))
    };
    match stacked {
        Ok(image) => cubemap.image_handle = Some(images.add(image)),
        Err(err) => {
            warn!("{err:#}; background stays black");
            cubemap.status = AssetStatus::Failed;
        }
    }
}

/// Give every 3D camera the skybox once the cubemap exists
fn attach_skybox(
    mut commands: Commands,
    cubemap: Res<Cubemap>,
    cameras: Query<Entity, (With<Camera3d>, Without<Skybox>)>,
) {
    let Some(image) = &cubemap.image_handle else {
        return;
    };
    for camera in cameras.iter() {
        commands.entity(camera).insert(Skybox {
            image: image.clone(),
            brightness: SKYBOX_BRIGHTNESS,
            ..default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::render_resource::TextureFormat;

    fn face(side: u32, pixel: [u8; 4]) -> Image {
        Image::new_fill(
            Extent3d {
                width: side,
                height: side,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &pixel,
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        )
    }

    #[test]
    fn six_faces_become_a_cube() {
        let faces: Vec<Image> = (0..6u8).map(|i| face(4, [i, 0, 0, 255])).collect();
        let refs: Vec<&Image> = faces.iter().collect();

        let cube = stack_faces(&refs).expect("stack");

        assert_eq!(cube.texture_descriptor.array_layer_count(), 6);
        assert_eq!(cube.width(), 4);
        assert_eq!(cube.height(), 4);
        let data = cube.data.as_ref().expect("data");
        assert_eq!(data.len(), 4 * 4 * 4 * 6);
        // Layer order is preserved.
        assert_eq!(data[4 * 4 * 4 * 5], 5);
        assert_eq!(
            cube.texture_view_descriptor
                .as_ref()
                .and_then(|view| view.dimension),
            Some(TextureViewDimension::Cube)
        );
    }

    #[test]
    fn mismatched_face_is_rejected() {
        let mut faces: Vec<Image> = (0..5).map(|_| face(4, [0, 0, 0, 255])).collect();
        faces.push(face(8, [0, 0, 0, 255]));
        let refs: Vec<&Image> = faces.iter().collect();

        let err = stack_faces(&refs).expect_err("size mismatch");
        assert!(err.to_string().contains("skybox/back.png"));
    }

    #[test]
    fn wrong_face_count_is_rejected() {
        let faces: Vec<Image> = (0..3).map(|_| face(4, [0, 0, 0, 255])).collect();
        let refs: Vec<&Image> = faces.iter().collect();
        assert!(stack_faces(&refs).is_err());
    }
}
