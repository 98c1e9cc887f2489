//! Components and resources for the animated bodies

use bevy::prelude::*;

/// Marker for planet entities driven by the orbital animator
#[derive(Component)]
pub struct Planet;

/// World-space anchor an on-screen name label follows.
/// Pinned every frame to its body's position plus a fixed offset.
#[derive(Component)]
pub struct LabelAnchor {
    pub body: Entity,
}

/// The one decorative ring, permanently bound to its parent planet at spawn
#[derive(Component)]
pub struct PlanetRing {
    pub planet: Entity,
}

/// Gates the per-frame orbital advance so the host can pause and resume it
#[derive(Resource)]
pub struct AnimationControl {
    pub running: bool,
}

impl Default for AnimationControl {
    fn default() -> Self {
        Self { running: true }
    }
}
