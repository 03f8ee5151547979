//! Flappy Duck — a terminal side-scroller.
//!
//! - `entities`: duck, pipes, geometry and the session state
//! - `obstacles`: spawning, scrolling and pruning the pipe stream
//! - `compute`: the per-tick state machine (menu → ready → playing → game over)
//! - `config`: difficulty profiles, validation and the settings file
//! - `input` / `view` / `display`: terminal events in, frames out

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod obstacles;
pub mod view;
