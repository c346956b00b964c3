//! Controller layer: backend events and keyboard input mapping.

pub mod events;
pub mod input;
