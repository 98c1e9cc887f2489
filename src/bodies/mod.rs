//! The animated bodies: catalog, orbital state, and the per-frame advance.
//!
//! This module owns everything that moves. Each planet entity carries an
//! [`motion::OrbitalMotion`] stepped once per frame; label anchors and the
//! ring follow as ordered systems within the same frame.

use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod motion;
pub mod systems;

pub use components::{AnimationControl, LabelAnchor, Planet, PlanetRing};
pub use motion::OrbitalMotion;
pub use systems::{
    advance_orbits, animation_running, spawn_bodies, toggle_animation, update_label_anchors,
    update_ring_position,
};

/// Plugin for body spawning and the orbital animation loop
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationControl>()
            .add_systems(Startup, spawn_bodies)
            .add_systems(
                Update,
                (
                    toggle_animation,
                    (
                        advance_orbits,
                        update_label_anchors.after(advance_orbits),
                        update_ring_position.after(advance_orbits),
                    )
                        .run_if(animation_running),
                ),
            );
    }
}
