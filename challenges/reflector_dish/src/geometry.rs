use std::fmt;

use strum::{Display, EnumIter, EnumString};

/// A cell coordinate. The origin is the top-left corner, `x` grows rightward
/// and `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn within(&self, height: usize, width: usize) -> bool {
        self.x < width && self.y < height
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four directions a dish can be tilted towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "north", serialize = "n")]
    North,
    #[strum(to_string = "south", serialize = "s")]
    South,
    #[strum(to_string = "west", serialize = "w")]
    West,
    #[strum(to_string = "east", serialize = "e")]
    East,
}

impl Direction {
    /// Unit step `(dx, dy)` in the direction of travel.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// The neighbour of `from` one cell in this direction, or `None` when that
    /// step leaves a `height x width` surface.
    pub fn step(self, from: Position, height: usize, width: usize) -> Option<Position> {
        self.advance(from, 1, height, width)
    }

    /// Moves `from` by `cells` steps in this direction, staying on the surface.
    pub fn advance(
        self,
        from: Position,
        cells: usize,
        height: usize,
        width: usize,
    ) -> Option<Position> {
        let (dx, dy) = self.delta();
        let cells = isize::try_from(cells).ok()?;
        let x = from.x.checked_add_signed(dx * cells)?;
        let y = from.y.checked_add_signed(dy * cells)?;
        let next = Position::new(x, y);
        next.within(height, width).then_some(next)
    }
}
