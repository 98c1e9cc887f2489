//! Visualization module
//!
//! One-time declarative scene pieces (sun, orbit guides, starfield) and the
//! label rendering that tracks the animated bodies.

use bevy::prelude::*;
use bevy::transform::TransformSystems;

pub mod labels;
pub mod orbit_guides;
pub mod starfield;
pub mod sun;

pub use labels::LabelText;
pub use starfield::Starfield;
pub use sun::Sun;

/// Plugin for the static scene and label rendering
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                sun::spawn_sun,
                orbit_guides::spawn_orbit_guides,
                // after the bodies so the shared rng stream stays reproducible
                starfield::spawn_starfield.after(crate::bodies::spawn_bodies),
            ),
        )
        .add_systems(PostStartup, labels::spawn_labels)
        .add_systems(
            PostUpdate,
            // project after this frame's transforms (including the camera's)
            // have been propagated
            labels::project_labels.after(TransformSystems::Propagate),
        );
    }
}
