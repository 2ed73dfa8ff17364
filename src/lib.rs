//! Voice Snake - a grid snake game with keyboard and voice control
//!
//! This library provides:
//! - Core game logic: tick state machine, collision rules, speed curve,
//!   bonus-food gating and labyrinth generation (game module)
//! - Command sources: keyboard handler, thread-safe command slot and the
//!   voice noise filter (input module)
//! - Per-mode persistent high/low score ledger (score module)
//! - Terminal rendering and the interactive play session (render, modes)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod score;
