use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::ConfigError;
use crate::simulation::body::Body;
use crate::simulation::{boundary, collision};
use crate::utils::color::hsl_to_rgb;

/// Fixed simulation constants. `Default` is the shipped configuration;
/// nothing reconfigures these at runtime.
#[derive(Debug, Clone)]
pub(crate) struct WorldConfig {
    pub body_count: usize,
    pub body_radius: f32,
    /// Added to every body's vertical velocity each frame.
    pub gravity: f32,
    pub width: f32,
    pub height: f32,
    /// Target simulation steps per second; pacing is enforced by the
    /// presentation layer, the physics step performs no timing.
    pub frame_rate: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            body_count: 50,
            body_radius: 10.0,
            gravity: 0.2,
            width: 800.0,
            height: 600.0,
            frame_rate: 60,
        }
    }
}

impl WorldConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.body_count == 0 {
            return Err(ConfigError::InvalidParam("body_count must be > 0".into()));
        }
        if !self.body_radius.is_finite() || self.body_radius <= 0.0 {
            return Err(ConfigError::InvalidParam(
                "body_radius must be finite and > 0".into(),
            ));
        }
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width < 2.0 * self.body_radius
            || self.height < 2.0 * self.body_radius
        {
            return Err(ConfigError::InvalidParam(
                "viewport must be finite and at least 2 * body_radius per axis".into(),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidParam("gravity must be finite".into()));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidParam("frame_rate must be > 0".into()));
        }
        Ok(())
    }
}

/// The full body collection plus simulation constants.
///
/// `bodies` is the physics state; `colors` holds the presentation attribute
/// for the body at the same index. The body population is fixed for the
/// process lifetime, and mutation happens only inside [`World::step`].
#[derive(Debug)]
pub(crate) struct World {
    config: WorldConfig,
    pub bodies: Vec<Body>,
    pub colors: Vec<[f32; 4]>,
}

impl World {
    /// Builds a world with `config.body_count` bodies at randomized
    /// positions (inset from the walls by one radius), velocities and
    /// colors. A fixed seed makes the spawn deterministic; `None` draws
    /// one from the OS.
    pub(crate) fn new(config: WorldConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rand::thread_rng().next_u64()),
        };

        let r = config.body_radius;
        let mut bodies = Vec::with_capacity(config.body_count);
        let mut colors = Vec::with_capacity(config.body_count);
        for _ in 0..config.body_count {
            bodies.push(Body {
                position: Vec2::new(
                    rng.gen_range(r..=config.width - r),
                    rng.gen_range(r..=config.height - r),
                ),
                velocity: Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)),
                radius: r,
            });

            let (red, green, blue) = hsl_to_rgb(rng.gen_range(0.0..1.0), 0.8, 0.6);
            colors.push([red, green, blue, 1.0]);
        }

        Ok(Self {
            config,
            bodies,
            colors,
        })
    }

    pub(crate) fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// One simulation step: integrate every body against gravity and the
    /// viewport walls, then resolve body-body overlaps pair by pair.
    pub(crate) fn step(&mut self) {
        for body in &mut self.bodies {
            boundary::integrate(body, &self.config);
        }
        let resolved = collision::resolve_overlaps(&mut self.bodies);
        if resolved > 0 {
            log::trace!("resolved {resolved} collision pairs");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_respects_the_wall_inset() {
        let config = WorldConfig::default();
        let (w, h) = (config.width, config.height);
        let world = World::new(config, Some(7)).unwrap();

        assert_eq!(world.bodies.len(), 50);
        assert_eq!(world.colors.len(), 50);
        for body in &world.bodies {
            assert_eq!(body.radius, 10.0);
            assert!(body.position.x >= body.radius && body.position.x <= w - body.radius);
            assert!(body.position.y >= body.radius && body.position.y <= h - body.radius);
            assert!(body.velocity.x >= -2.0 && body.velocity.x < 2.0);
            assert!(body.velocity.y >= -2.0 && body.velocity.y < 2.0);
        }
        for color in &world.colors {
            assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
            assert_eq!(color[3], 1.0);
        }
    }

    #[test]
    fn same_seed_spawns_the_same_world() {
        let a = World::new(WorldConfig::default(), Some(42)).unwrap();
        let b = World::new(WorldConfig::default(), Some(42)).unwrap();
        assert_eq!(a.bodies, b.bodies);
        assert_eq!(a.colors, b.colors);
    }

    #[test]
    fn zero_radius_is_rejected() {
        let config = WorldConfig {
            body_radius: 0.0,
            ..WorldConfig::default()
        };
        let err = World::new(config, Some(1)).unwrap_err();
        assert!(err.to_string().contains("body_radius"));
    }

    #[test]
    fn undersized_viewport_is_rejected() {
        let config = WorldConfig {
            width: 15.0,
            ..WorldConfig::default()
        };
        let err = World::new(config, Some(1)).unwrap_err();
        assert!(err.to_string().contains("viewport"));
    }

    #[test]
    fn empty_population_is_rejected() {
        let config = WorldConfig {
            body_count: 0,
            ..WorldConfig::default()
        };
        assert!(World::new(config, Some(1)).is_err());
    }

    #[test]
    fn step_applies_gravity() {
        let config = WorldConfig {
            gravity: 0.5,
            ..WorldConfig::default()
        };
        let mut world = World {
            config,
            bodies: vec![Body {
                position: glam::Vec2::new(400.0, 300.0),
                velocity: glam::Vec2::ZERO,
                radius: 10.0,
            }],
            colors: vec![[1.0; 4]],
        };
        world.step();
        assert_eq!(world.bodies[0].velocity.y, 0.5);
        assert_eq!(world.bodies[0].position.y, 300.5);
    }

    #[test]
    fn step_resolves_an_approaching_pair() {
        let mk = |x: f32, vx: f32| Body {
            position: glam::Vec2::new(x, 100.0),
            velocity: glam::Vec2::new(vx, 0.0),
            radius: 10.0,
        };
        let mut world = World {
            config: WorldConfig {
                gravity: 0.0,
                ..WorldConfig::default()
            },
            bodies: vec![mk(100.0, 1.0), mk(115.0, -1.0)],
            colors: vec![[1.0; 4]; 2],
        };
        world.step();

        // after the move the centers sit 13 apart; resolution separates
        // them to exact contact and swaps the approach velocities
        let (a, b) = (world.bodies[0], world.bodies[1]);
        assert!((a.position.distance(b.position) - 20.0).abs() < 1e-4);
        assert!((a.velocity.x + 1.0).abs() < 1e-4);
        assert!((b.velocity.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn population_radii_and_colors_survive_many_frames() {
        let mut world = World::new(WorldConfig::default(), Some(99)).unwrap();
        let colors = world.colors.clone();
        for _ in 0..120 {
            world.step();
        }
        assert_eq!(world.bodies.len(), 50);
        assert!(world.bodies.iter().all(|b| b.radius == 10.0));
        assert_eq!(world.colors, colors);
    }

    #[test]
    fn bodies_never_stray_far_from_the_viewport() {
        // The wall snap happens before the positional move and pair
        // corrections can nudge a body outward afterwards, so strict
        // containment holds only up to one frame of travel plus the
        // pair-correction reach.
        let config = WorldConfig::default();
        let (w, h) = (config.width, config.height);
        let mut world = World::new(config, Some(1234)).unwrap();
        for _ in 0..600 {
            world.step();
            for body in &world.bodies {
                assert!(body.position.is_finite());
                let slack = body.velocity.length() + 2.0 * body.radius + 1e-3;
                assert!(body.position.x >= body.radius - slack);
                assert!(body.position.x <= w - body.radius + slack);
                assert!(body.position.y >= body.radius - slack);
                assert!(body.position.y <= h - body.radius + slack);
            }
        }
    }
}
