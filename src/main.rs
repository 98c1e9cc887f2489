use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod camera;
mod random;
mod visualization;

use bodies::BodiesPlugin;
use camera::{CameraPlugin, MainCamera};
use random::SceneRandom;
use visualization::VisualizationPlugin;

/// Initial camera placement: above and behind the orbital plane, looking at
/// the sun.
const CAMERA_START: Vec3 = Vec3::new(0.0, 100.0, 400.0);

// Setup camera and ambient lighting
pub fn setup(mut commands: Commands) {
    // Keeps the night side of each planet faintly visible.
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(64, 64, 64),
        brightness: 120.0,
        ..default()
    });

    let radius = CAMERA_START.length();
    let direction = CAMERA_START / radius;

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,               // Look at the sun
        radius: Some(radius),            // Initial distance from focus point
        yaw: Some(direction.x.atan2(direction.z)),
        pitch: Some(direction.y.asin()),
        orbit_smoothness: 0.25,          // Damped orbiting
        zoom_sensitivity: 1.0,           // Scroll zoom stays enabled
        force_update: true,              // Force immediate positioning
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            // The starfield reaches the corners of a 2000-unit cube; the
            // default far plane clips it.
            far: 4000.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orrery".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.init_resource::<SceneRandom>();

    app.add_plugins(PanOrbitCameraPlugin);

    // Add our custom plugins
    app.add_plugins(BodiesPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(CameraPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
