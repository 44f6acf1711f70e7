//! 2D platformer gameplay: a player movement state machine (walk, coyote-time
//! jumps with variable height, dash with a kill window), a raycast-sensing
//! chase enemy and a level-bounded follow camera, hosted on Bevy and avian2d.
//!
//! The movement core in [`movement`] does not depend on Bevy's scheduling:
//! [`movement::Simulation`] steps it from plain code, and the Bevy systems
//! are thin adapters around the same [`movement::PlayerController`].

pub mod camera;
pub mod config;
pub mod enemy;
pub mod level;
pub mod movement;
pub mod ui;
