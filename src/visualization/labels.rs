//! Planet name labels: UI text projected onto the viewport each frame.
//!
//! The world-space anchor entities in `bodies` carry the actual label
//! positions; this module only renders them, projecting each anchor through
//! the camera and hiding labels that fall outside the view.

use bevy::prelude::*;

use crate::bodies::components::{LabelAnchor, Planet};
use crate::camera::MainCamera;

/// Links a UI text node to the world-space anchor it tracks
#[derive(Component)]
pub struct LabelText {
    pub anchor: Entity,
}

/// PostStartup system: one text node per label anchor, named after the
/// anchor's planet.
pub fn spawn_labels(
    mut commands: Commands,
    anchors: Query<(Entity, &LabelAnchor)>,
    names: Query<&Name, With<Planet>>,
) {
    for (anchor_entity, anchor) in anchors.iter() {
        let Ok(name) = names.get(anchor.body) else {
            continue;
        };
        commands.spawn((
            Text::new(name.as_str()),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            LabelText {
                anchor: anchor_entity,
            },
        ));
    }
}

/// Pin each text node over its anchor's screen position.
pub fn project_labels(
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    anchors: Query<&GlobalTransform, (With<LabelAnchor>, Without<MainCamera>)>,
    mut labels: Query<(&LabelText, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };

    for (label, mut node, mut visibility) in labels.iter_mut() {
        let Ok(anchor) = anchors.get(label.anchor) else {
            continue;
        };
        match camera.world_to_viewport(camera_transform, anchor.translation()) {
            Ok(screen) => {
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y);
                *visibility = Visibility::Visible;
            }
            // behind the camera or outside the viewport
            Err(_) => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
