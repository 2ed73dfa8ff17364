use super::state::Position;

/// Static blocked-cell field for the labyrinth variant.
///
/// Generated once per game start and immutable afterwards. Generation is a
/// pure function of grid dimensions and the snake's start cell, so identical
/// inputs always yield an identical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleField {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl ObstacleField {
    /// Generate the labyrinth layout: vertical pillar columns every 4 cells
    /// with staggered gaps, then a 7x7 box around `start` forced clear so the
    /// snake always has a safe starting pocket.
    pub fn labyrinth(width: i32, height: i32, start: Position) -> Self {
        let mut field = Self {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
        };

        let mut x = 4;
        while x < width - 4 {
            let gap_toggle = (x / 4) % 2 == 0;
            for y in 2..height - 2 {
                let is_gap = (y % 6 == 0) ^ gap_toggle;
                if !is_gap {
                    field.set_blocked(Position::new(x, y), true);
                }
            }
            x += 4;
        }

        for dx in -3..=3 {
            for dy in -3..=3 {
                let pos = start.moved_by(dx, dy);
                if field.in_bounds(pos) {
                    field.set_blocked(pos, false);
                }
            }
        }

        field
    }

    /// True when the cell is blocked. Out-of-bounds positions are not
    /// obstacles; the wall check owns those.
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.blocked[self.index(pos)]
    }

    pub fn blocked_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .map(move |x| Position::new(x, y))
                .filter(|&pos| self.is_blocked(pos))
        })
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn index(&self, pos: Position) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    fn set_blocked(&mut self, pos: Position, value: bool) {
        let idx = self.index(pos);
        self.blocked[idx] = value;
    }
}
