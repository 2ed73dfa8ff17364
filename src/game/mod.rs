//! Core game logic for the snake state machine
//!
//! Everything here is deterministic given a random source: movement, growth,
//! collision detection, speed scaling, bonus-food gating and labyrinth
//! generation. No I/O or rendering dependencies; the driver feeds commands in
//! and reads state out.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod obstacles;
pub mod rng;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{GameConfig, GameMode, ModeParams};
pub use engine::{GameEngine, TickResult};
pub use food::BoardFull;
pub use obstacles::ObstacleField;
pub use rng::{GameRng, RandomSource};
pub use state::{
    EngineState, Food, GameOverCause, GameState, GameSummary, Position, Snake,
};
