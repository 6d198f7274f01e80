//! skyfire: a side-scrolling arcade shooter.
//!
//! The library holds everything the integration tests exercise: pure entity
//! data, the per-frame simulation, the spawner, and the audio clock logic.
//! `main.rs` wires those into a macroquad window.

pub mod assets;
pub mod audio;
pub mod compute;
pub mod constants;
pub mod display;
pub mod entities;
pub mod spawner;
