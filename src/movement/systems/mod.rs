//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::resolve_hostile_contacts;
pub(crate) use input::read_input;
pub(crate) use movement::{advance_player_frame, advance_player_physics, log_character_state};
