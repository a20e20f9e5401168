use std::collections::{BTreeSet, HashSet};

use crate::geometry::{Direction, Position};

/// Destinations of every roller after tilting towards `direction`.
///
/// Each destination is computed in closed form against the same snapshot of
/// the pre-tilt rollers, so the result does not depend on roller order. The
/// i-th output is where the i-th input comes to rest.
pub(crate) fn tilt(
    rollers: &[Position],
    obstacles: &BTreeSet<Position>,
    height: usize,
    width: usize,
    direction: Direction,
) -> Vec<Position> {
    let snapshot: HashSet<Position> = rollers.iter().copied().collect();
    let line = Line {
        obstacles,
        rollers: &snapshot,
        height,
        width,
        direction,
    };
    rollers.iter().map(|&roller| line.settle(roller)).collect()
}

/// One tilt seen from a single roller: the line of cells it travels along.
struct Line<'a> {
    obstacles: &'a BTreeSet<Position>,
    rollers: &'a HashSet<Position>,
    height: usize,
    width: usize,
    direction: Direction,
}

impl Line<'_> {
    /// Walks from `roller` to the last open cell before the first obstacle
    /// (or the edge), counting the rollers passed on the way. Those rollers
    /// pack against the same stop first, so this one rests that many cells
    /// short of it.
    fn settle(&self, roller: Position) -> Position {
        let mut end = roller;
        let mut ahead = 0;
        while let Some(next) = self.direction.step(end, self.height, self.width) {
            if self.obstacles.contains(&next) {
                break;
            }
            if self.rollers.contains(&next) {
                ahead += 1;
            }
            end = next;
        }

        // every counted roller sits on a distinct cell between `roller` and
        // `end`, so backing off never leaves the walked line.
        self.direction
            .opposite()
            .advance(end, ahead, self.height, self.width)
            .unwrap_or(roller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseDish;
    use strum::IntoEnumIterator;

    fn tilted(text: &str, direction: Direction) -> String {
        let mut dish = text.parse::<DenseDish>().unwrap().to_sparse();
        dish.shift(direction);
        dish.to_string()
    }

    #[test]
    fn test_row_with_obstacle() {
        assert_eq!(".O#..OO\n", tilted("O.#O.O.", Direction::East));
        assert_eq!("O.#OO..\n", tilted("O.#O.O.", Direction::West));
        // nothing moves vertically on a single row
        assert_eq!("O.#O.O.\n", tilted("O.#O.O.", Direction::North));
        assert_eq!("O.#O.O.\n", tilted("O.#O.O.", Direction::South));
    }

    #[test]
    fn test_column() {
        assert_eq!("O\nO\n.\n.\n", tilted("O\n.\nO\n.", Direction::North));
        assert_eq!(".\n.\nO\nO\n", tilted("O\n.\nO\n.", Direction::South));
        assert_eq!("O\n#\nO\n.\n", tilted("O\n#\n.\nO", Direction::North));
        assert_eq!(".\n#\n.\nO\n", tilted(".\n#\nO\n.", Direction::South));
    }

    #[test]
    fn test_no_obstacles_targets_edge() {
        assert_eq!("...\n...\nO.O\n", tilted("O..\n...\n..O", Direction::South));
        assert_eq!("..O\n...\n..O\n", tilted("O..\n...\n..O", Direction::East));
        assert_eq!("O.O\n...\n...\n", tilted("O..\n...\n..O", Direction::North));
    }

    #[test]
    fn test_blocked_roller_stays() {
        assert_eq!("#O.\n", tilted("#O.", Direction::West));
        assert_eq!("OO#\n", tilted("OO#", Direction::East));
    }

    #[test]
    fn test_order_is_preserved() {
        let rollers = [Position::new(3, 0), Position::new(0, 0), Position::new(1, 0)];
        let result = tilt(&rollers, &BTreeSet::new(), 1, 5, Direction::East);
        assert_eq!(
            vec![Position::new(4, 0), Position::new(2, 0), Position::new(3, 0)],
            result
        );
    }

    #[test]
    fn test_packed_line_is_fixed_point() {
        let text = "OO.#\n.#OO\n#OO.\n";
        for direction in Direction::iter() {
            let once = tilted(text, direction);
            assert_eq!(once, tilted(&once, direction), "{}", direction);
        }
    }
}
