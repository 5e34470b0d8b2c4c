//! Tile-swap puzzle engine.
//!
//! An interactive tile puzzle played against a live video feed. The engine
//! core (`core`) is a single-threaded, tick-driven state machine over a tile
//! permutation; video capture, persistent storage, and remote text
//! generation are collaborator traits (`collab`); `input` maps pointer and
//! key events to grid interactions; `term` is a terminal demo frontend
//! standing in for the pixel render collaborator.

pub mod collab;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
