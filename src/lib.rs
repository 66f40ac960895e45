//! Core simulation library for two frame-driven visual sketches.
//!
//! Main components:
//! - [`lorenz`] — forward-Euler Lorenz attractor with a bounded point history.
//! - [`particle`] — transient particle bursts with gravity, friction and fade.
//! - [`config`] — tunable parameters for both simulations.
//!
//! Neither simulation owns a frame loop. An external rendering driver is
//! expected to call `advance()` once per frame and read the state back
//! between ticks; input events (e.g. clicks) are forwarded as
//! [`particle::ParticleSystem::spawn_batch`] calls.

pub mod config;
pub mod lorenz;
pub mod particle;
