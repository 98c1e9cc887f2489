//! Camera behavior on top of the pan-orbit controller

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_panorbit_camera::PanOrbitCamera;

/// Marker for the scene camera
#[derive(Component)]
pub struct MainCamera;

// Roughly one revolution every 30 seconds at 60 fps. Applied once per
// frame, not per second, matching the orbital advance.
const AUTO_ROTATE_RAD_PER_FRAME: f32 = 0.0035;

/// Host-side camera flags
#[derive(Resource)]
pub struct CameraSettings {
    pub auto_rotate: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self { auto_rotate: true }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Update, (auto_rotate_camera, watch_viewport_resize));
    }
}

/// Slow idle spin around the scene, layered on the user's own orbiting by
/// nudging the controller's target yaw.
fn auto_rotate_camera(
    settings: Res<CameraSettings>,
    mut query: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    if !settings.auto_rotate {
        return;
    }
    let Ok(mut pan_orbit) = query.single_mut() else {
        return;
    };
    pan_orbit.target_yaw += AUTO_ROTATE_RAD_PER_FRAME;
}

/// Log viewport size changes. Aspect ratio and viewport recomputation are
/// the renderer's job; this keeps the resize observable.
fn watch_viewport_resize(
    window: Query<&Window, With<PrimaryWindow>>,
    mut last_size: Local<Option<UVec2>>,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let size = window.physical_size();
    if *last_size != Some(size) {
        if last_size.is_some() {
            info!("viewport resized to {}x{}", size.x, size.y);
        }
        *last_size = Some(size);
    }
}
