//! RAMPART headless driver.
//!
//! Wires the simulation crates to a fixed-rate game loop thread and a
//! scripted session runner, with no presentation layer attached.

pub mod game_loop;
pub mod session;
