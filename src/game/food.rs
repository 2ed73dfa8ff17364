use super::obstacles::ObstacleField;
use super::rng::RandomSource;
use super::state::{Position, Snake};

/// Food placement failed because every free cell is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFull;

impl std::fmt::Display for BoardFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no free cell left for food placement")
    }
}

impl std::error::Error for BoardFull {}

/// Pick a cell for the next food item: uniform over the grid, rejecting cells
/// occupied by the snake or blocked by an obstacle.
///
/// Random sampling is capped at one draw per grid cell; after that a linear
/// scan finds a free cell if one exists, so a saturated board reports
/// [`BoardFull`] instead of looping forever.
pub fn place_food(
    rng: &mut dyn RandomSource,
    snake: &Snake,
    obstacles: Option<&ObstacleField>,
    grid_width: i32,
    grid_height: i32,
) -> Result<Position, BoardFull> {
    let is_free = |pos: Position| {
        !snake.contains(pos) && !obstacles.is_some_and(|field| field.is_blocked(pos))
    };

    let max_tries = (grid_width * grid_height) as usize;
    for _ in 0..max_tries {
        let pos = Position::new(
            rng.uniform_int(grid_width as u32) as i32,
            rng.uniform_int(grid_height as u32) as i32,
        );
        if is_free(pos) {
            return Ok(pos);
        }
    }

    // Unlucky or nearly full; fall back to an exhaustive scan.
    for y in 0..grid_height {
        for x in 0..grid_width {
            let pos = Position::new(x, y);
            if is_free(pos) {
                return Ok(pos);
            }
        }
    }

    Err(BoardFull)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::game::action::Direction;

    /// Replays a scripted sequence of integer draws, then zeroes.
    struct ScriptedRng {
        ints: VecDeque<u32>,
    }

    impl ScriptedRng {
        fn new(ints: &[u32]) -> Self {
            Self {
                ints: ints.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedRng {
        fn uniform_int(&mut self, upper: u32) -> u32 {
            self.ints.pop_front().unwrap_or(0).min(upper - 1)
        }

        fn uniform_real(&mut self) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_avoids_snake_cells() {
        let snake = Snake::new(Position::new(2, 0), Direction::Right, 3);
        // First two draws land on the snake, third is free.
        let mut rng = ScriptedRng::new(&[2, 0, 1, 0, 3, 3]);

        let pos = place_food(&mut rng, &snake, None, 10, 10).unwrap();
        assert_eq!(pos, Position::new(3, 3));
    }

    #[test]
    fn test_avoids_obstacles() {
        let snake = Snake::new(Position::new(15, 14), Direction::Right, 3);
        let field = ObstacleField::labyrinth(30, 28, Position::new(15, 14));
        // (4, 2) is a pillar cell; the next draw must be used instead.
        let mut rng = ScriptedRng::new(&[4, 2, 0, 0]);

        let pos = place_food(&mut rng, &snake, Some(&field), 30, 28).unwrap();
        assert_eq!(pos, Position::new(0, 0));
    }

    #[test]
    fn test_board_full_is_reported() {
        // A snake occupying every cell of a 3x2 grid.
        let mut body = VecDeque::new();
        for y in 0..2 {
            for x in 0..3 {
                body.push_back(Position::new(x, y));
            }
        }
        let snake = Snake {
            body,
            direction: Direction::Right,
        };
        let mut rng = ScriptedRng::new(&[]);

        assert_eq!(place_food(&mut rng, &snake, None, 3, 2), Err(BoardFull));
    }

    #[test]
    fn test_scan_fallback_finds_last_free_cell() {
        // All but one cell occupied; scripted draws always hit the snake.
        let mut body = VecDeque::new();
        for y in 0..2 {
            for x in 0..3 {
                if (x, y) != (2, 1) {
                    body.push_back(Position::new(x, y));
                }
            }
        }
        let snake = Snake {
            body,
            direction: Direction::Right,
        };
        let mut rng = ScriptedRng::new(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

        let pos = place_food(&mut rng, &snake, None, 3, 2).unwrap();
        assert_eq!(pos, Position::new(2, 1));
    }
}
