//! Room boundary discovery.
//!
//! Rooms are found by walking wall loops cell by cell, always taking the
//! tightest anti-clockwise turn at corners. Every corner visited is probed
//! for further loops that leave it, and those are queued and walked in turn
//! until no new loop is found.

mod branch;
mod walk;

pub use branch::{discover, Seed};
pub use walk::{advance, Direction};

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace, warn};

use crate::error::TraceError;
use crate::grid::{Coord, Glyph, Grid};
use crate::room::Perimeter;

/// Pending and already-seen seeds of one tracing pass.
#[derive(Debug, Default)]
struct TraceQueue {
    pending: VecDeque<Seed>,
    processed: HashSet<Seed>,
}

impl TraceQueue {
    fn extend(&mut self, seeds: Vec<Seed>) {
        for seed in seeds {
            if self.processed.insert(seed) {
                debug!(corner = %seed.corner, next = %seed.next, "queued branch");
                self.pending.push_back(seed);
            }
        }
    }

    fn pop(&mut self) -> Option<Seed> {
        let seed = self.pending.pop_front()?;
        self.processed.insert(seed);
        Some(seed)
    }
}

/// Traces every room boundary reachable from the first corner of `grid`.
///
/// Perimeters are returned in the order they were closed. A grid without
/// any corner has no rooms.
///
/// # Errors
///
/// Returns `TraceError::MalformedBoundary` if any walk cannot continue or
/// does not return to its start corner.
pub fn trace_rooms(grid: &Grid) -> Result<Vec<Perimeter>, TraceError> {
    let Some(origin) = grid.first_corner() else {
        warn!("plan has no corners, no rooms traced");
        return Ok(Vec::new());
    };

    let mut queue = TraceQueue::default();
    let seeds = discover(grid, origin, None, &queue.processed);
    queue.extend(seeds);

    let mut perimeters = Vec::new();
    while let Some(seed) = queue.pop() {
        let perimeter = trace_one(grid, seed, &mut queue)?;
        debug!(
            start = %seed.corner,
            cells = perimeter.len(),
            "traced room boundary"
        );
        perimeters.push(perimeter);
    }

    Ok(perimeters)
}

/// Walks one loop from `seed` back to its start corner.
fn trace_one(grid: &Grid, seed: Seed, queue: &mut TraceQueue) -> Result<Perimeter, TraceError> {
    let limit = 4 * grid.height() * grid.width() + 8;

    let mut cells = vec![seed.corner, seed.next];
    let mut previous = seed.corner;
    let mut current = seed.next;
    let mut direction = seed.direction;

    while current != seed.corner {
        if cells.len() > limit {
            return Err(TraceError::MalformedBoundary {
                at: seed.corner,
                glyph: '+',
                reason: "boundary walk never returned to its start corner",
            });
        }

        let (next, next_direction) = advance(grid, current, previous, direction)?;
        if grid.glyph(current) == Some(Glyph::Corner) {
            trace!(corner = %current, next = %next, "visiting corner");
            let seeds = discover(grid, current, Some(next), &queue.processed);
            queue.extend(seeds);
        }

        previous = current;
        current = next;
        direction = next_direction;
        cells.push(current);
    }

    Ok(Perimeter::new(cells))
}

/// Coordinates of every corner glyph in `grid`.
pub fn corners(grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    grid.coords().filter(|&at| grid.glyph(at) == Some(Glyph::Corner))
}
