use bevy::prelude::*;

/// One catalog entry: everything needed to spawn and animate a planet.
pub struct BodyConfig {
    pub name: &'static str,
    pub body_radius: f32,
    pub orbit_radius: f32,
    pub color: Color,
    /// Magnitude of the per-frame angle step; direction is drawn at spawn.
    pub angular_speed: f32,
}

/// Catalog index of the planet that carries the decorative ring.
pub const RINGED_PLANET_INDEX: usize = 4; // Jupiter
pub const RING_INNER_RADIUS: f32 = 15.0;
pub const RING_OUTER_RADIUS: f32 = 25.0;

// Expose the catalog as a function so spawners and tests consume the same data
pub fn planet_catalog() -> Vec<BodyConfig> {
    vec![
        BodyConfig {
            name: "Mercury",
            body_radius: 5.0,
            orbit_radius: 50.0,
            color: Color::srgb_u8(170, 170, 170),
            angular_speed: 0.02,
        },
        BodyConfig {
            name: "Venus",
            body_radius: 8.0,
            orbit_radius: 80.0,
            color: Color::srgb_u8(255, 160, 122),
            angular_speed: 0.015,
        },
        BodyConfig {
            name: "Earth",
            body_radius: 10.0,
            orbit_radius: 110.0,
            color: Color::srgb_u8(0, 0, 255),
            angular_speed: 0.01,
        },
        BodyConfig {
            name: "Mars",
            body_radius: 7.0,
            orbit_radius: 150.0,
            color: Color::srgb_u8(255, 69, 0),
            angular_speed: 0.009,
        },
        BodyConfig {
            name: "Jupiter",
            body_radius: 20.0,
            orbit_radius: 200.0,
            color: Color::srgb_u8(255, 140, 0),
            angular_speed: 0.005,
        },
        BodyConfig {
            name: "Saturn",
            body_radius: 18.0,
            orbit_radius: 250.0,
            color: Color::srgb_u8(255, 215, 0),
            angular_speed: 0.004,
        },
        BodyConfig {
            name: "Uranus",
            body_radius: 15.0,
            orbit_radius: 300.0,
            color: Color::srgb_u8(0, 255, 255),
            angular_speed: 0.003,
        },
        BodyConfig {
            name: "Neptune",
            body_radius: 15.0,
            orbit_radius: 350.0,
            color: Color::srgb_u8(0, 0, 205),
            angular_speed: 0.002,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_the_eight_planets_in_order() {
        let catalog = planet_catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].name, "Mercury");
        assert_eq!(catalog[7].name, "Neptune");
        for pair in catalog.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
        }
    }

    #[test]
    fn catalog_values_are_positive_magnitudes() {
        for config in planet_catalog() {
            assert!(config.body_radius > 0.0, "{}", config.name);
            assert!(config.orbit_radius > 0.0, "{}", config.name);
            assert!(config.angular_speed > 0.0, "{}", config.name);
        }
    }

    #[test]
    fn ring_binding_points_at_a_real_planet() {
        let catalog = planet_catalog();
        assert!(RINGED_PLANET_INDEX < catalog.len());
        assert_eq!(catalog[RINGED_PLANET_INDEX].name, "Jupiter");
        assert!(RING_INNER_RADIUS < RING_OUTER_RADIUS);
    }
}
