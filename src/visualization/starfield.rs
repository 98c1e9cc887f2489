//! Starfield backdrop: one point-list mesh of uniformly scattered vertices.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use rand::Rng;

use crate::random::SceneRandom;

pub const STAR_COUNT: usize = 10_000;
/// Stars scatter through the [-extent, extent] cube around the origin.
pub const STARFIELD_EXTENT: f32 = 1000.0;

/// Marker component for the starfield entity
#[derive(Component)]
pub struct Starfield;

/// Uniform star positions in the cube. Deterministic for a given rng state.
pub fn star_positions(rng: &mut impl Rng, count: usize, extent: f32) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                (rng.random::<f32>() - 0.5) * 2.0 * extent,
                (rng.random::<f32>() - 0.5) * 2.0 * extent,
                (rng.random::<f32>() - 0.5) * 2.0 * extent,
            ]
        })
        .collect()
}

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<SceneRandom>,
) {
    let positions = star_positions(&mut rng.0, STAR_COUNT, STARFIELD_EXTENT);
    let mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Starfield,
        Name::new("Starfield"),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn star_positions_fill_the_cube() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let stars = star_positions(&mut rng, 500, 1000.0);
        assert_eq!(stars.len(), 500);
        for [x, y, z] in &stars {
            assert!(x.abs() <= 1000.0);
            assert!(y.abs() <= 1000.0);
            assert!(z.abs() <= 1000.0);
        }
    }

    #[test]
    fn star_positions_are_deterministic_for_a_seed() {
        let a = star_positions(&mut ChaCha8Rng::seed_from_u64(4), 100, 500.0);
        let b = star_positions(&mut ChaCha8Rng::seed_from_u64(4), 100, 500.0);
        assert_eq!(a, b);
    }
}
