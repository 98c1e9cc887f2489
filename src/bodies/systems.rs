//! Systems that spawn the bodies and advance them each frame

use bevy::prelude::*;
use bevy::render::mesh::{SphereKind, SphereMeshBuilder};
use std::f32::consts::FRAC_PI_2;

use crate::bodies::components::{AnimationControl, LabelAnchor, Planet, PlanetRing};
use crate::bodies::config::{
    RING_INNER_RADIUS, RING_OUTER_RADIUS, RINGED_PLANET_INDEX, planet_catalog,
};
use crate::bodies::motion::{OrbitalMotion, initial_motion_set, label_position, ring_position};
use crate::random::SceneRandom;

/// Startup system: build every planet from the catalog, its label anchor,
/// and the one ring. Runs exactly once; nothing is added or removed later.
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<SceneRandom>,
) {
    let catalog = planet_catalog();
    let motions = initial_motion_set(&catalog, &mut rng.0);

    let mut planets = Vec::with_capacity(catalog.len());
    for (config, motion) in catalog.iter().zip(motions) {
        let start = motion.position();
        let planet = commands
            .spawn((
                Mesh3d(meshes.add(SphereMeshBuilder::new(
                    config.body_radius,
                    SphereKind::Ico { subdivisions: 5 },
                ))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: config.color,
                    perceptual_roughness: 0.5,
                    metallic: 0.5,
                    ..default()
                })),
                Transform::from_translation(start),
                Planet,
                motion,
                Name::new(config.name),
            ))
            .id();

        commands.spawn((
            LabelAnchor { body: planet },
            Transform::from_translation(label_position(start)),
            Name::new(format!("{} label", config.name)),
        ));

        planets.push((planet, start));
    }

    let (ringed_planet, ringed_start) = planets[RINGED_PLANET_INDEX];
    commands.spawn((
        Mesh3d(meshes.add(Annulus::new(RING_INNER_RADIUS, RING_OUTER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(255, 215, 0),
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        // laid flat into the orbital plane once; only the translation moves
        Transform::from_translation(ring_position(ringed_start))
            .with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        PlanetRing {
            planet: ringed_planet,
        },
        Name::new("Ring"),
    ));

    info!(
        "spawned {} planets, ring bound to {}",
        planets.len(),
        catalog[RINGED_PLANET_INDEX].name
    );
}

/// The per-frame advance: step every body's angle and derive its position.
/// No time delta; the step size is a fixed constant per body.
pub fn advance_orbits(mut query: Query<(&mut OrbitalMotion, &mut Transform), With<Planet>>) {
    for (mut motion, mut transform) in query.iter_mut() {
        motion.advance();
        transform.translation = motion.position();
    }
}

/// Keep each label anchor beside its body.
pub fn update_label_anchors(
    bodies: Query<&Transform, With<Planet>>,
    mut anchors: Query<(&LabelAnchor, &mut Transform), Without<Planet>>,
) {
    for (anchor, mut transform) in anchors.iter_mut() {
        let Ok(body) = bodies.get(anchor.body) else {
            continue;
        };
        transform.translation = label_position(body.translation);
    }
}

/// Keep the ring under its parent planet, flat in the orbital plane.
pub fn update_ring_position(
    bodies: Query<&Transform, With<Planet>>,
    mut rings: Query<(&PlanetRing, &mut Transform), Without<Planet>>,
) {
    for (ring, mut transform) in rings.iter_mut() {
        let Ok(parent) = bodies.get(ring.planet) else {
            continue;
        };
        transform.translation = ring_position(parent.translation);
    }
}

/// Space pauses and resumes the animation; the camera stays live throughout.
pub fn toggle_animation(
    input: Res<ButtonInput<KeyCode>>,
    mut control: ResMut<AnimationControl>,
) {
    if input.just_pressed(KeyCode::Space) {
        control.running = !control.running;
        info!(
            "orbital animation {}",
            if control.running { "resumed" } else { "paused" }
        );
    }
}

/// Run condition for the advance chain.
pub fn animation_running(control: Res<AnimationControl>) -> bool {
    control.running
}
