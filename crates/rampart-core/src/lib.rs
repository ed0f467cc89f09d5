//! Core types and definitions for the RAMPART simulation.
//!
//! This crate defines the shared vocabulary used by every other crate in
//! the workspace: components, commands, state snapshots, events, and
//! constants. It has no dependency on the engine or any runtime framework,
//! so frontends and tools can link it without pulling in the simulation.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
