//! The reflector dish: a rectangular surface of rolling and fixed rocks that
//! can be tilted in four directions.
//!
//! A dish is written down as a [`DenseDish`] (`.` free, `O` rolling, `#`
//! fixed) and tilted as a [`SparseDish`]:
//!
//! ```
//! use reflector_dish::{DenseDish, Direction};
//!
//! let mut dish = "O.#O.".parse::<DenseDish>().unwrap().to_sparse();
//! dish.shift(Direction::East);
//! assert_eq!(".O#.O\n", dish.to_string());
//! ```

pub mod commands;
mod dense;
mod error;
mod geometry;
mod sparse;
mod spin;
mod tilt;

pub use dense::{Cell, DenseDish};
pub use error::{DishError, ErrorKind};
pub use geometry::{Direction, Position};
pub use sparse::SparseDish;
pub use spin::SPIN_ORDER;
