/// Parameters for the Lorenz attractor integrator.
///
/// The defaults are the classic chaotic-but-bounded regime. Nothing guards
/// against pathological values; the integrator is allowed to diverge.
#[derive(Clone, Copy, Debug)]
pub struct LorenzConfig {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
    /// Forward-Euler step size.
    pub dt: f64,
    /// Maximum number of retained trail points; oldest are evicted first.
    pub max_history: usize,
}

impl Default for LorenzConfig {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
            dt: 0.01,
            max_history: 3000,
        }
    }
}

/// Parameters for the particle burst simulation.
///
/// Coordinates are screen-space: positive `y` points down, so `gravity`
/// pulls down and `upward_kick` biases spawn velocity up.
#[derive(Clone, Copy, Debug)]
pub struct ParticleConfig {
    /// Conventional batch size a driver spawns per click/tap.
    pub particles_per_spawn: u32,
    pub min_size: f64,
    pub max_size: f64,
    pub gravity: f64,
    /// Per-tick velocity damping factor, expected in `(0, 1)`.
    pub friction: f64,
    /// Amount subtracted from lifespan every tick.
    pub fade_speed: f64,
    /// Half-width of the uniform horizontal spawn velocity range.
    pub velocity_range: f64,
    /// Constant upward offset added to the spawn velocity.
    pub upward_kick: f64,
    /// Initial lifespan; doubles as the full-opacity alpha value.
    pub max_lifespan: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            particles_per_spawn: 30,
            min_size: 4.0,
            max_size: 12.0,
            gravity: 0.15,
            friction: 0.98,
            fade_speed: 3.0,
            velocity_range: 8.0,
            upward_kick: 2.0,
            max_lifespan: 255.0,
        }
    }
}
