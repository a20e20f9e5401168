use std::collections::HashMap;

use log::{debug, trace};

use crate::geometry::Direction;
use crate::sparse::SparseDish;

/// The tilt order of one spin cycle.
pub const SPIN_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
];

impl SparseDish {
    /// Tilts north, west, south and then east.
    pub fn spin_cycle(&mut self) {
        for direction in SPIN_ORDER {
            self.shift(direction);
        }
    }

    /// Runs `cycles` spin cycles.
    ///
    /// A spin cycle only depends on the current roller layout, so the layouts
    /// eventually repeat. Once a layout is seen twice the remaining whole
    /// periods are skipped.
    pub fn spin(&mut self, cycles: u64) {
        let mut seen: HashMap<_, u64> = HashMap::new();
        let mut done = 0;
        while done < cycles {
            if let Some(first) = seen.insert(self.sorted_rollers(), done) {
                let period = done - first;
                let remaining = (cycles - done) % period;
                debug!(
                    "layout after {} cycles repeats cycle {}, period {}, {} left",
                    done, first, period, remaining
                );
                for _ in 0..remaining {
                    self.spin_cycle();
                }
                return;
            }
            self.spin_cycle();
            done += 1;
            trace!("finished spin cycle {}", done);
        }
    }
}
