//! The sun and the light it casts

use bevy::prelude::*;
use bevy::render::mesh::{SphereKind, SphereMeshBuilder};

pub const SUN_RADIUS: f32 = 30.0;

/// Marker component for the sun entity
#[derive(Component)]
pub struct Sun;

pub fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Unlit so the sun glows on its own; the planets are lit by the point
    // light below instead.
    commands.spawn((
        Mesh3d(meshes.add(SphereMeshBuilder::new(
            SUN_RADIUS,
            SphereKind::Ico { subdivisions: 5 },
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(255, 204, 0),
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Sun,
        Name::new("Sun"),
    ));

    commands.spawn((
        PointLight {
            color: Color::WHITE,
            // Scene units are not meters; sized so Neptune's orbit still reads.
            intensity: 2_000_000_000.0,
            range: 5000.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("Sunlight"),
    ));
}
