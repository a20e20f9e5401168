//! Text-in, text-out entry points used by the `reflector-dish` binary.

use crate::dense::DenseDish;
use crate::error::DishError;
use crate::geometry::Direction;
use crate::sparse::SparseDish;

fn parse(input: &str) -> Result<SparseDish, DishError> {
    Ok(input.parse::<DenseDish>()?.to_sparse())
}

/// The dish after one tilt, rendered.
pub fn tilt(input: &str, direction: Direction) -> Result<String, DishError> {
    let mut dish = parse(input)?;
    dish.shift(direction);
    Ok(dish.to_string())
}

/// The dish after `cycles` spin cycles, rendered.
pub fn spin(input: &str, cycles: u64) -> Result<String, DishError> {
    let mut dish = parse(input)?;
    dish.spin(cycles);
    Ok(dish.to_string())
}

/// Load on the `direction` edge, optionally after tilting towards it.
pub fn load(input: &str, direction: Direction, tilt_first: bool) -> Result<usize, DishError> {
    let mut dish = parse(input)?;
    if tilt_first {
        dish.shift(direction);
    }
    Ok(dish.load(direction))
}
