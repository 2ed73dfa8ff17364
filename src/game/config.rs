use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Game variant selected before a session starts.
///
/// Each variant binds a base tick delay and a bonus-food spawn chance through
/// [`GameMode::params`]; the engine itself stays mode-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum GameMode {
    Classic = 0,
    Intermediate = 1,
    Labyrinth = 2,
    Expert = 3,
}

/// Per-mode tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeParams {
    /// Tick interval before any speed scaling kicks in
    pub base_delay: Duration,
    /// Chance that a bonus food spawns when a new score segment is entered
    pub bonus_chance: f64,
}

// Indexed by the GameMode discriminant.
const MODE_PARAMS: [ModeParams; 4] = [
    // Classic: very slow start
    ModeParams {
        base_delay: Duration::from_millis(300),
        bonus_chance: 0.5,
    },
    // Intermediate
    ModeParams {
        base_delay: Duration::from_millis(270),
        bonus_chance: 0.4,
    },
    // Labyrinth: slow start due to obstacles
    ModeParams {
        base_delay: Duration::from_millis(300),
        bonus_chance: 0.5,
    },
    // Expert
    ModeParams {
        base_delay: Duration::from_millis(240),
        bonus_chance: 0.3,
    },
];

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Classic,
        GameMode::Intermediate,
        GameMode::Labyrinth,
        GameMode::Expert,
    ];

    pub fn params(self) -> ModeParams {
        MODE_PARAMS[self as usize]
    }

    /// Whether this variant carries a procedurally generated obstacle field
    pub fn has_obstacles(self) -> bool {
        self == GameMode::Labyrinth
    }

    pub fn name(self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Intermediate => "Intermediate",
            GameMode::Labyrinth => "Labyrinth",
            GameMode::Expert => "Expert",
        }
    }
}

/// Configuration for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: i32,
    /// Height of the game grid
    pub grid_height: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Selected game variant
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 28,
            initial_snake_length: 3,
            mode: GameMode::Classic,
        }
    }
}

impl GameConfig {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            grid_width: 10,
            grid_height: 10,
            ..Default::default()
        }
    }
}
