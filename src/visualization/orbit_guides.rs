use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::bodies::config::planet_catalog;

const GUIDE_HALF_WIDTH: f32 = 0.5;

/// Marker component for the static orbit guide circles
#[derive(Component)]
pub struct OrbitGuide;

/// Startup system: one thin white annulus per catalog entry, laid flat into
/// the orbital plane. These never move.
pub fn spawn_orbit_guides(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for config in planet_catalog() {
        commands.spawn((
            Mesh3d(meshes.add(Annulus::new(
                config.orbit_radius - GUIDE_HALF_WIDTH,
                config.orbit_radius + GUIDE_HALF_WIDTH,
            ))),
            MeshMaterial3d(material.clone()),
            Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            OrbitGuide,
            Name::new(format!("{} orbit", config.name)),
        ));
    }
}
