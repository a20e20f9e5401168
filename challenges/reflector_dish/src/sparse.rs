use std::collections::{BTreeSet, HashSet};
use std::fmt;

use log::debug;

use crate::dense::{Cell, DenseDish};
use crate::error::DishError;
use crate::geometry::{Direction, Position};
use crate::tilt;

/// The coordinate form of a dish, the one that can be tilted.
///
/// `obstacles`, `height` and `width` are fixed at construction. `rollers` is
/// replaced as a whole by every shift.
#[derive(Debug, Clone, Eq)]
pub struct SparseDish {
    height: usize,
    width: usize,
    rollers: Vec<Position>,
    obstacles: BTreeSet<Position>,
}

impl SparseDish {
    /// Builds a dish from raw coordinates.
    ///
    /// Out-of-bounds coordinates, rollers on obstacles and two rollers on one
    /// cell are all rejected here, so every later operation can assume a
    /// valid dish.
    pub fn new(
        height: usize,
        width: usize,
        rollers: impl IntoIterator<Item = Position>,
        obstacles: impl IntoIterator<Item = Position>,
    ) -> Result<Self, DishError> {
        let out_of_bounds = |position: Position| DishError::OutOfBounds {
            position,
            height,
            width,
        };

        let mut blocked = BTreeSet::new();
        for obstacle in obstacles {
            if !obstacle.within(height, width) {
                return Err(out_of_bounds(obstacle));
            }
            blocked.insert(obstacle);
        }

        let rollers: Vec<Position> = rollers.into_iter().collect();
        let mut seen = HashSet::with_capacity(rollers.len());
        for &roller in &rollers {
            if !roller.within(height, width) {
                return Err(out_of_bounds(roller));
            }
            if blocked.contains(&roller) {
                return Err(DishError::RollerOnObstacle(roller));
            }
            if !seen.insert(roller) {
                return Err(DishError::DuplicateRoller(roller));
            }
        }

        Ok(Self::from_parts(height, width, rollers, blocked))
    }

    /// Unchecked constructor for callers that already hold a valid layout.
    pub(crate) fn from_parts(
        height: usize,
        width: usize,
        rollers: Vec<Position>,
        obstacles: BTreeSet<Position>,
    ) -> Self {
        Self {
            height,
            width,
            rollers,
            obstacles,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rollers(&self) -> &[Position] {
        &self.rollers
    }

    pub fn obstacles(&self) -> &BTreeSet<Position> {
        &self.obstacles
    }

    /// Rebuilds the cell matrix: free everywhere, then obstacles, then
    /// rollers.
    pub fn to_dense(&self) -> DenseDish {
        let mut rows = vec![vec![Cell::Free; self.width]; self.height];
        for obstacle in &self.obstacles {
            rows[obstacle.y][obstacle.x] = Cell::Obstacle;
        }
        for roller in &self.rollers {
            rows[roller.y][roller.x] = Cell::Rolling;
        }
        DenseDish::from_rows(rows)
    }

    /// Tilts the dish towards `direction`. Every roller slides until an
    /// obstacle, another roller or the edge stops it.
    pub fn shift(&mut self, direction: Direction) {
        debug!("tilting {} rollers {}", self.rollers.len(), direction);
        self.rollers = tilt::tilt(
            &self.rollers,
            &self.obstacles,
            self.height,
            self.width,
            direction,
        );
    }

    /// Same surface, same obstacles and the same rollers regardless of the
    /// order they are listed in.
    pub fn equivalent(&self, other: &SparseDish) -> bool {
        self.height == other.height
            && self.width == other.width
            && self.obstacles == other.obstacles
            && self.sorted_rollers() == other.sorted_rollers()
    }

    pub(crate) fn sorted_rollers(&self) -> Vec<Position> {
        let mut rollers = self.rollers.clone();
        rollers.sort_unstable();
        rollers
    }

    /// Total load on the support beams of the edge `direction` points at.
    /// A roller weighs as many cells as lie between the opposite edge and
    /// itself, its own cell included.
    pub fn load(&self, direction: Direction) -> usize {
        self.rollers
            .iter()
            .map(|roller| match direction {
                Direction::North => self.height - roller.y,
                Direction::South => roller.y + 1,
                Direction::West => self.width - roller.x,
                Direction::East => roller.x + 1,
            })
            .sum()
    }
}

impl PartialEq for SparseDish {
    fn eq(&self, other: &Self) -> bool {
        self.equivalent(other)
    }
}

impl fmt::Display for SparseDish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_dense(), f)
    }
}
