use std::collections::VecDeque;
use std::time::Duration;

use super::action::Direction;
use super::config::GameMode;
use super::obstacles::ObstacleField;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake: an ordered run of grid cells, head at the front.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: VecDeque<Position>,
    /// Current heading; changed only through the engine, which rejects
    /// reversals.
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given head position and heading; the body
    /// trails behind the head against the heading.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let mut body = VecDeque::with_capacity(length);
        for i in 0..length as i32 {
            body.push_back(head.moved_by(-dx * i, -dy * i));
        }
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        *self.body.front().expect("snake body must never be empty")
    }

    /// The cell the head will occupy after one step in the current heading
    pub fn next_head(&self) -> Position {
        self.head().moved_in_direction(self.direction)
    }

    /// Advance one cell in the current heading. When `grow` is set the tail
    /// stays put and the snake gains a segment.
    pub fn advance(&mut self, grow: bool) {
        let next = self.next_head();
        self.body.push_front(next);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Check if a position collides with the body, head excluded
    pub fn hits_body(&self, pos: Position) -> bool {
        self.body.iter().skip(1).any(|&cell| cell == pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// A food item on the grid. Bonus food is worth 50 points instead of 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub pos: Position,
    pub bonus: bool,
}

impl Food {
    pub fn points(&self) -> u32 {
        if self.bonus {
            50
        } else {
            10
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Head left the grid
    Wall,
    /// Head hit a labyrinth obstacle
    Obstacle,
    /// Head hit the snake's own body
    SelfCollision,
    /// No free cell left for food placement
    BoardFull,
}

/// Lifecycle of a game session. `Paused` is only reachable from `Running`
/// and back; `GameOver` holds until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Paused,
    GameOver,
}

/// Ledger outcome captured when a game ends, for the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    /// Persisted high score after this game's submission
    pub high: u32,
    /// Persisted low score after submission; 0 means still unset
    pub low: u32,
    /// Whether this game beat the previous persisted high
    pub new_high: bool,
}

/// Complete state of one game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    /// Present only in labyrinth mode; immutable for the game's duration
    pub obstacles: Option<ObstacleField>,
    pub mode: GameMode,
    pub grid_width: i32,
    pub grid_height: i32,
    pub score: u32,
    pub status: EngineState,
    /// Current tick interval after speed scaling; the driver re-arms its
    /// timer from this after every score-changing event.
    pub tick_interval: Duration,
    /// Set on transition to `GameOver`
    pub summary: Option<GameSummary>,
}

impl GameState {
    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_width && pos.y >= 0 && pos.y < self.grid_height
    }

    pub fn is_blocked(&self, pos: Position) -> bool {
        self.obstacles
            .as_ref()
            .is_some_and(|field| field.is_blocked(pos))
    }

    pub fn current_interval(&self) -> Duration {
        self.tick_interval
    }
}
