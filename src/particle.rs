//! Click-burst particle simulation.
//!
//! The typical update loop is:
//! 1. The input driver forwards each click/tap as a
//!    [`ParticleSystem::spawn_batch`] call.
//! 2. Once per render frame, [`ParticleSystem::advance`] steps every live
//!    particle and sweeps out the dead ones.
//! 3. The rendering driver reads [`ParticleSystem::particles`] to draw, and
//!    [`ParticleSystem::is_empty`] to decide whether to show the idle hint.

use crate::config::ParticleConfig;
use glam::DVec2;
use rand::Rng;

/// A single point-mass particle with visual-decay state.
///
/// All fields are plain values; there is exactly one particle shape, so the
/// collection in [`ParticleSystem`] stores these directly.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub acc: DVec2,
    /// Current display diameter; shrinks linearly with lifespan.
    pub size: f64,
    pub initial_size: f64,
    /// HSB color, fixed at spawn: hue in `[0, 360)`, saturation and
    /// brightness in `[0, 100]`.
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    /// Remaining life; starts at [`ParticleConfig::max_lifespan`] and
    /// decreases monotonically until the particle is removed.
    pub lifespan: f64,
}

impl Particle {
    /// Spawns a particle at `pos` with randomized velocity, size and color.
    ///
    /// The horizontal velocity is uniform over
    /// `[-velocity_range, velocity_range]`; the vertical component is
    /// uniform over `[-velocity_range, velocity_range / 2]` shifted up by
    /// `upward_kick`, so bursts lean upward before gravity takes over.
    pub fn spawn(pos: DVec2, cfg: &ParticleConfig, rng: &mut impl Rng) -> Self {
        let r = cfg.velocity_range;
        let vel = DVec2::new(
            rng.random_range(-r..=r),
            rng.random_range(-r..=r / 2.0) - cfg.upward_kick,
        );
        let size = rng.random_range(cfg.min_size..=cfg.max_size);

        Self {
            pos,
            vel,
            acc: DVec2::new(0.0, cfg.gravity),
            size,
            initial_size: size,
            hue: rng.random_range(0.0..360.0),
            saturation: rng.random_range(70.0..=100.0),
            brightness: rng.random_range(80.0..=100.0),
            lifespan: cfg.max_lifespan,
        }
    }

    /// Advances the particle by one tick.
    ///
    /// Order matters: acceleration is added to the velocity first, then
    /// friction scales it, then the position moves by the damped velocity.
    /// Afterwards the lifespan fades and the size is recomputed as a linear
    /// ramp of the remaining lifespan into `[0, initial_size]`.
    pub fn step(&mut self, cfg: &ParticleConfig) {
        self.vel += self.acc;
        self.vel *= cfg.friction;
        self.pos += self.vel;

        self.lifespan -= cfg.fade_speed;
        self.size = self.initial_size * (self.lifespan / cfg.max_lifespan).max(0.0);
    }

    /// `true` once the lifespan has run out; the next sweep removes it.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.lifespan <= 0.0
    }

    /// Display alpha: the lifespan clamped to `[0, max_lifespan]`.
    #[inline]
    pub fn alpha(&self, cfg: &ParticleConfig) -> f64 {
        self.lifespan.clamp(0.0, cfg.max_lifespan)
    }
}

/// An unordered, growable collection of live particles.
///
/// Membership changes only via [`spawn_batch`](Self::spawn_batch) (insert)
/// and the death sweep inside [`advance`](Self::advance) (remove).
#[derive(Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    cfg: ParticleConfig,
}

impl ParticleSystem {
    /// Creates an empty system with the given configuration.
    pub fn new(cfg: ParticleConfig) -> Self {
        Self {
            particles: Vec::new(),
            cfg,
        }
    }

    /// Spawns `count` particles at `pos`, each with independently drawn
    /// velocity, size and color.
    ///
    /// `pos` and `count` are used as given; validating them (finite
    /// coordinates, sane counts) is the caller's concern.
    pub fn spawn_batch(&mut self, pos: DVec2, count: u32, rng: &mut impl Rng) {
        self.particles.reserve(count as usize);
        for _ in 0..count {
            self.particles.push(Particle::spawn(pos, &self.cfg, rng));
        }
    }

    /// Steps every live particle, then removes all dead ones.
    ///
    /// The sweep uses [`Vec::retain`], so adjacent particles dying on the
    /// same tick are all removed; no element is skipped the way a forward
    /// index-while-removing loop would.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.step(&self.cfg);
        }
        self.particles.retain(|p| !p.is_dead());
    }

    /// Read-only view of the live particles, for display.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// `true` when no particles are alive (drives the idle hint).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The configuration this system was built with.
    #[inline]
    pub fn config(&self) -> &ParticleConfig {
        &self.cfg
    }
}
