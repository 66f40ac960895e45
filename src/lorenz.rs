//! Forward-Euler integrator for the Lorenz system.
//!
//! The typical update loop is one [`LorenzAttractor::advance`] call per
//! render frame, after which the driver reads [`LorenzAttractor::history`]
//! to draw the trail.

use std::collections::VecDeque;

use crate::config::LorenzConfig;
use glam::DVec3;

/// A single Lorenz trajectory plus a bounded trail of visited points.
///
/// The state is one position in continuous 3-D space, advanced with a fixed
/// time step. Every step appends the new position to a FIFO history capped
/// at [`LorenzConfig::max_history`] entries.
#[derive(Debug)]
pub struct LorenzAttractor {
    pos: DVec3,
    cfg: LorenzConfig,
    history: VecDeque<DVec3>,
}

impl LorenzAttractor {
    /// Creates an attractor at the conventional seed point `(0.01, 0, 0)`
    /// with an empty history.
    pub fn new(cfg: LorenzConfig) -> Self {
        Self::from_position(DVec3::new(0.01, 0.0, 0.0), cfg)
    }

    /// Creates an attractor at an arbitrary starting position.
    pub fn from_position(pos: DVec3, cfg: LorenzConfig) -> Self {
        Self {
            pos,
            cfg,
            history: VecDeque::with_capacity(cfg.max_history),
        }
    }

    /// Advances the trajectory by one Euler step.
    ///
    /// The three differentials are evaluated at the current position:
    ///
    /// - `dx = sigma * (y - x) * dt`
    /// - `dy = (x * (rho - z) - y) * dt`
    /// - `dz = (x * y - beta * z) * dt`
    ///
    /// then applied together, so the step uses only pre-step state. The new
    /// position is appended to the history, evicting the oldest point once
    /// the cap is reached.
    ///
    /// Total over all finite inputs; pathological parameters can drive the
    /// position unbounded or to NaN, which is accepted rather than guarded.
    pub fn advance(&mut self) {
        let LorenzConfig {
            sigma,
            rho,
            beta,
            dt,
            ..
        } = self.cfg;
        let DVec3 { x, y, z } = self.pos;

        let dx = sigma * (y - x) * dt;
        let dy = (x * (rho - z) - y) * dt;
        let dz = (x * y - beta * z) * dt;

        self.pos += DVec3::new(dx, dy, dz);

        if self.history.len() == self.cfg.max_history {
            self.history.pop_front();
        }
        self.history.push_back(self.pos);
    }

    /// Current position of the trajectory.
    #[inline]
    pub fn position(&self) -> DVec3 {
        self.pos
    }

    /// Retained trail points, oldest first. Length never exceeds
    /// [`LorenzConfig::max_history`].
    pub fn history(&self) -> impl Iterator<Item = &DVec3> {
        self.history.iter()
    }

    /// Number of retained trail points.
    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// `true` if no steps have been taken yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step_matches_hand_computed_euler() {
        // sigma=10, rho=28, beta=8/3, dt=0.01 from (0.01, 0, 0):
        //   dx = 10 * (0 - 0.01) * 0.01 = -0.001
        //   dy = (0.01 * 28 - 0) * 0.01 =  0.0028
        //   dz = (0.01 * 0 - 8/3 * 0) * 0.01 = 0
        let mut att = LorenzAttractor::new(LorenzConfig::default());
        att.advance();

        let p = att.position();
        assert!((p.x - 0.009).abs() < 1e-12);
        assert!((p.y - 0.0028).abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn advance_appends_current_position() {
        let mut att = LorenzAttractor::new(LorenzConfig::default());
        assert!(att.is_empty());

        att.advance();
        att.advance();

        assert_eq!(att.len(), 2);
        // The last history entry is always the live position.
        assert_eq!(att.history().last().copied(), Some(att.position()));
    }

    #[test]
    fn history_evicts_oldest_at_small_cap() {
        let cfg = LorenzConfig {
            max_history: 3,
            ..LorenzConfig::default()
        };
        let mut att = LorenzAttractor::new(cfg);

        att.advance();
        att.advance();
        let second = att.position();

        // Two more appends: four total, so the first point falls out.
        att.advance();
        att.advance();

        assert_eq!(att.len(), 3);
        assert_eq!(att.history().next().copied(), Some(second));
    }

    #[test]
    fn history_is_capped_at_default_limit() {
        let mut att = LorenzAttractor::new(LorenzConfig::default());

        att.advance();
        att.advance();
        let second = att.position();

        for _ in 0..2999 {
            att.advance();
        }

        // 3001 appends: still 3000 retained, and the oldest is the
        // 2nd point ever produced.
        assert_eq!(att.len(), 3000);
        assert_eq!(att.history().next().copied(), Some(second));
    }
}
