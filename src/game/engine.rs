use std::time::Duration;

use super::action::{Command, Direction};
use super::config::GameConfig;
use super::food::place_food;
use super::obstacles::ObstacleField;
use super::rng::RandomSource;
use super::state::{
    EngineState, Food, GameOverCause, GameState, GameSummary, Position, Snake,
};
use crate::score::ScoreLedger;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Points awarded this tick (0, 10 or 50)
    pub points: u32,
    /// Set when this tick ended the game
    pub cause: Option<GameOverCause>,
    /// Set when a restart command re-entered `Running`
    pub restarted: bool,
}

impl TickResult {
    fn idle() -> Self {
        Self {
            ate_food: false,
            points: 0,
            cause: None,
            restarted: false,
        }
    }
}

/// Gates bonus-food attempts to at most one Bernoulli trial per 50-point
/// score segment. Segment 0 never attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BonusGate {
    last_attempt_segment: u32,
}

impl BonusGate {
    fn new() -> Self {
        Self {
            last_attempt_segment: 0,
        }
    }

    /// True when entering a segment that has not been attempted yet; marks
    /// the segment attempted as a side effect.
    fn should_attempt(&mut self, score: u32) -> bool {
        let segment = score / 50;
        if segment >= 1 && segment != self.last_attempt_segment {
            self.last_attempt_segment = segment;
            true
        } else {
            false
        }
    }
}

/// The tick state machine: movement, collision evaluation, scoring, speed
/// adaptation and game-over/restart transitions.
///
/// The engine owns the random source and the score ledger; everything mutable
/// per game lives in [`GameState`], which the driver holds between ticks.
pub struct GameEngine {
    config: GameConfig,
    rng: Box<dyn RandomSource>,
    ledger: Box<dyn ScoreLedger>,
    bonus_gate: BonusGate,
}

impl GameEngine {
    pub fn new(
        config: GameConfig,
        rng: Box<dyn RandomSource>,
        ledger: Box<dyn ScoreLedger>,
    ) -> Self {
        Self {
            config,
            rng,
            ledger,
            bonus_gate: BonusGate::new(),
        }
    }

    /// Start a fresh game: snake of initial length centered heading right,
    /// obstacles regenerated for labyrinth mode, food placed, speed and bonus
    /// state reset.
    pub fn reset(&mut self) -> GameState {
        let start = Position::new(self.config.grid_width / 2, self.config.grid_height / 2);
        let snake = Snake::new(start, Direction::Right, self.config.initial_snake_length);

        let obstacles = self.config.mode.has_obstacles().then(|| {
            ObstacleField::labyrinth(self.config.grid_width, self.config.grid_height, start)
        });

        self.bonus_gate = BonusGate::new();

        // The board cannot be saturated with a fresh snake.
        let pos = place_food(
            self.rng.as_mut(),
            &snake,
            obstacles.as_ref(),
            self.config.grid_width,
            self.config.grid_height,
        )
        .expect("fresh board must have room for food");

        GameState {
            snake,
            food: Food { pos, bonus: false },
            obstacles,
            mode: self.config.mode,
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
            score: 0,
            status: EngineState::Running,
            tick_interval: self.config.mode.params().base_delay,
            summary: None,
        }
    }

    /// Advance the simulation by one tick, consuming at most one command.
    ///
    /// While paused, everything is skipped. After a game over only `Restart`
    /// is honored; movement commands are dropped.
    pub fn tick(&mut self, state: &mut GameState, command: Option<Command>) -> TickResult {
        match state.status {
            EngineState::Paused => return TickResult::idle(),
            EngineState::GameOver => {
                if command == Some(Command::Restart) {
                    *state = self.reset();
                    return TickResult {
                        restarted: true,
                        ..TickResult::idle()
                    };
                }
                return TickResult::idle();
            }
            EngineState::Running => {}
        }

        if let Some(Command::Move(dir)) = command {
            if !state.snake.direction.is_opposite(dir) {
                state.snake.direction = dir;
            }
        }

        let next = state.snake.next_head();

        // Collision precedence: wall, then obstacle, then self.
        if !state.is_in_bounds(next) {
            return self.finish(state, GameOverCause::Wall);
        }
        if state.is_blocked(next) {
            return self.finish(state, GameOverCause::Obstacle);
        }

        let ate_food = next == state.food.pos;
        state.snake.advance(ate_food);

        if state.snake.hits_body(next) {
            return self.finish(state, GameOverCause::SelfCollision);
        }

        if !ate_food {
            return TickResult::idle();
        }

        let points = state.food.points();
        state.score += points;
        state.tick_interval = interval_for(state.mode.params().base_delay, state.score);

        match self.place_next_food(state) {
            Ok(food) => state.food = food,
            Err(_) => {
                let mut result = self.finish(state, GameOverCause::BoardFull);
                result.ate_food = true;
                result.points = points;
                return result;
            }
        }

        TickResult {
            ate_food: true,
            points,
            cause: None,
            restarted: false,
        }
    }

    /// Pause toggle; only meaningful while Running or Paused.
    pub fn toggle_pause(&mut self, state: &mut GameState) {
        state.status = match state.status {
            EngineState::Running => EngineState::Paused,
            EngineState::Paused => EngineState::Running,
            EngineState::GameOver => EngineState::GameOver,
        };
    }

    fn place_next_food(&mut self, state: &GameState) -> Result<Food, super::food::BoardFull> {
        let pos = place_food(
            self.rng.as_mut(),
            &state.snake,
            state.obstacles.as_ref(),
            state.grid_width,
            state.grid_height,
        )?;

        let bonus = self.bonus_gate.should_attempt(state.score)
            && self.rng.uniform_real() < state.mode.params().bonus_chance;

        Ok(Food { pos, bonus })
    }

    /// End the game: flag a new high against the pre-submission ledger value,
    /// submit, then re-read both scores for display.
    fn finish(&mut self, state: &mut GameState, cause: GameOverCause) -> TickResult {
        let new_high = state.score > self.ledger.get_high(state.mode);
        self.ledger.submit(state.mode, state.score);

        state.summary = Some(GameSummary {
            score: state.score,
            high: self.ledger.get_high(state.mode),
            low: self.ledger.get_low(state.mode),
            new_high,
        });
        state.status = EngineState::GameOver;

        TickResult {
            ate_food: false,
            points: 0,
            cause: Some(cause),
            restarted: false,
        }
    }
}

/// Tick interval for a cumulative score: multiplicative on the mode's base
/// delay, re-evaluated from the absolute score after every scoring event.
fn interval_for(base: Duration, score: u32) -> Duration {
    let factor = if score >= 500 {
        0.40
    } else if score >= 400 {
        0.50
    } else if score >= 300 {
        0.60
    } else if score >= 200 {
        0.70
    } else if score >= 100 {
        0.85
    } else {
        1.0
    };
    Duration::from_millis((base.as_millis() as f64 * factor).round() as u64)
}
