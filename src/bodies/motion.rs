//! Orbital state and the per-frame advance.
//!
//! Pure math with no scheduling dependencies; the Bevy systems in
//! `bodies::systems` call into it once per frame.

use bevy::math::Vec3;
use bevy::prelude::Component;
use rand::Rng;
use std::f32::consts::TAU;

use crate::bodies::config::BodyConfig;

/// World-unit offset from a body to its floating name label.
pub const LABEL_OFFSET: Vec3 = Vec3::new(10.0, 10.0, 0.0);

/// Orbital state of one body. Radius and speed magnitude are fixed at spawn;
/// only the angle changes afterwards.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitalMotion {
    pub orbit_radius: f32,
    /// Signed per-frame angle step. Not scaled by elapsed time; motion is
    /// tied to the frame rate.
    pub angular_speed: f32,
    pub angle: f32,
}

impl OrbitalMotion {
    /// One frame's worth of orbital travel.
    pub fn advance(&mut self) {
        self.angle += self.angular_speed;
    }

    /// Cartesian position on the orbit circle. All orbits are coplanar in XZ.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.orbit_radius,
            0.0,
            self.angle.sin() * self.orbit_radius,
        )
    }
}

/// Where a body's label sits, given the body position.
pub fn label_position(body: Vec3) -> Vec3 {
    body + LABEL_OFFSET
}

/// Where the ring sits, given its parent body position. The ring stays flat
/// in the orbital plane: the parent's vertical component is not inherited.
pub fn ring_position(parent: Vec3) -> Vec3 {
    Vec3::new(parent.x, 0.0, parent.z)
}

/// Draw the random phase and direction for one catalog entry: a uniform
/// starting angle in [0, 2π) and a fair coin flip for the orbit direction.
pub fn initial_motion(config: &BodyConfig, rng: &mut impl Rng) -> OrbitalMotion {
    let angle = rng.random_range(0.0..TAU);
    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    OrbitalMotion {
        orbit_radius: config.orbit_radius,
        angular_speed: config.angular_speed * direction,
        angle,
    }
}

/// Initial states for the whole catalog, in catalog order. The only place
/// body randomness enters; runs once per process.
pub fn initial_motion_set(catalog: &[BodyConfig], rng: &mut impl Rng) -> Vec<OrbitalMotion> {
    catalog
        .iter()
        .map(|config| initial_motion(config, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::config::planet_catalog;
    use bevy::prelude::Color;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn earthlike() -> OrbitalMotion {
        OrbitalMotion {
            orbit_radius: 110.0,
            angular_speed: 0.01,
            angle: 0.0,
        }
    }

    #[test]
    fn advance_accumulates_fixed_steps() {
        let mut motion = OrbitalMotion {
            orbit_radius: 110.0,
            angular_speed: 0.01,
            angle: 0.25,
        };
        for _ in 0..100 {
            motion.advance();
        }
        assert!((motion.angle - (0.25 + 100.0 * 0.01)).abs() < 1e-4);
    }

    #[test]
    fn position_stays_on_the_orbit_circle() {
        let mut motion = OrbitalMotion {
            orbit_radius: 150.0,
            angular_speed: -0.009,
            angle: 1.0,
        };
        for _ in 0..50 {
            motion.advance();
            let pos = motion.position();
            assert!((pos.x - 150.0 * motion.angle.cos()).abs() < 1e-3);
            assert!((pos.z - 150.0 * motion.angle.sin()).abs() < 1e-3);
            assert_eq!(pos.y, 0.0);
            assert!((pos.length() - 150.0).abs() < 1e-2);
        }
    }

    #[test]
    fn single_step_from_zero_phase() {
        let mut motion = earthlike();
        motion.advance();
        assert!((motion.angle - 0.01).abs() < 1e-6);
        let pos = motion.position();
        assert!((pos.x - 109.9945).abs() < 1e-2);
        assert!((pos.z - 1.0999).abs() < 1e-2);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn full_revolution_returns_near_the_start() {
        let mut motion = earthlike();
        // 628 steps of 0.01 is one revolution up to the 2π remainder
        for _ in 0..628 {
            motion.advance();
        }
        assert!((motion.angle - 6.28).abs() < 1e-3);
        let pos = motion.position();
        assert!((pos.x - 110.0).abs() < 0.5);
        assert!(pos.z.abs() < 0.5);
    }

    #[test]
    fn radius_and_speed_magnitude_are_invariant() {
        let mut motion = OrbitalMotion {
            orbit_radius: 250.0,
            angular_speed: -0.004,
            angle: 2.5,
        };
        for _ in 0..1000 {
            motion.advance();
        }
        assert_eq!(motion.orbit_radius, 250.0);
        assert_eq!(motion.angular_speed, -0.004);
    }

    #[test]
    fn initialization_is_deterministic_for_a_seed() {
        let catalog = planet_catalog();
        let mut a = initial_motion_set(&catalog, &mut ChaCha8Rng::seed_from_u64(7));
        let mut b = initial_motion_set(&catalog, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
        for _ in 0..100 {
            for (ma, mb) in a.iter_mut().zip(b.iter_mut()) {
                ma.advance();
                mb.advance();
                assert_eq!(ma.angle.to_bits(), mb.angle.to_bits());
                assert_eq!(ma.position(), mb.position());
            }
        }
    }

    #[test]
    fn initialization_draws_phase_and_keeps_magnitudes() {
        let catalog = planet_catalog();
        let motions = initial_motion_set(&catalog, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(motions.len(), catalog.len());
        for (motion, config) in motions.iter().zip(catalog.iter()) {
            assert!((0.0..TAU).contains(&motion.angle));
            assert_eq!(motion.orbit_radius, config.orbit_radius);
            assert!((motion.angular_speed.abs() - config.angular_speed).abs() < 1e-9);
        }
    }

    #[test]
    fn both_orbit_directions_occur() {
        let config = BodyConfig {
            name: "test",
            body_radius: 1.0,
            orbit_radius: 10.0,
            color: Color::WHITE,
            angular_speed: 0.01,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut prograde = false;
        let mut retrograde = false;
        for _ in 0..64 {
            let motion = initial_motion(&config, &mut rng);
            if motion.angular_speed > 0.0 {
                prograde = true;
            } else {
                retrograde = true;
            }
        }
        assert!(prograde && retrograde);
    }

    #[test]
    fn empty_catalog_is_a_noop() {
        let mut motions = initial_motion_set(&[], &mut ChaCha8Rng::seed_from_u64(1));
        assert!(motions.is_empty());
        for motion in motions.iter_mut() {
            motion.advance();
        }
    }

    #[test]
    fn label_follows_the_body_with_a_fixed_offset() {
        let body = Vec3::new(42.0, 0.0, -17.0);
        assert_eq!(label_position(body), Vec3::new(52.0, 10.0, -17.0));
    }

    #[test]
    fn ring_tracks_its_parent_in_the_orbital_plane() {
        assert_eq!(
            ring_position(Vec3::new(50.0, 0.0, 0.0)),
            Vec3::new(50.0, 0.0, 0.0)
        );
        // the parent's own vertical offset is not inherited
        assert_eq!(
            ring_position(Vec3::new(3.0, 8.0, -4.0)),
            Vec3::new(3.0, 0.0, -4.0)
        );
    }
}
