use std::collections::HashSet;

use crate::grid::{Coord, Grid};

use super::walk::Direction;

/// A pending trace: start at `corner`, step onto `next`, keep moving in
/// `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed {
    pub corner: Coord,
    pub next: Coord,
    pub direction: Direction,
}

/// Probes around a corner in clockwise order, as offsets to subtract from
/// the corner, each with the direction a new trace would start in.
const BRANCH_PROBES: [(Coord, Direction); 4] = [
    (Coord::new(0, -1), Direction::Right),
    (Coord::new(-1, -1), Direction::Down),
    (Coord::new(-1, 0), Direction::Down),
    (Coord::new(-1, 1), Direction::Down),
];

/// Finds new room boundaries that leave `corner`.
///
/// Wall neighbors right of and below the corner are collected clockwise,
/// stopping after `continuing` (the cell the current walk moves on to).
/// The last collected wall is the one the walk itself owns; every earlier
/// one starts another room. With fewer than two walls the corner opens no
/// new room. Seeds already in `processed` are skipped.
pub fn discover(
    grid: &Grid,
    corner: Coord,
    continuing: Option<Coord>,
    processed: &HashSet<Seed>,
) -> Vec<Seed> {
    let mut walls = Vec::with_capacity(BRANCH_PROBES.len());
    for (offset, direction) in BRANCH_PROBES {
        let neighbor = corner - offset;
        if grid.is_wall(neighbor) {
            walls.push((neighbor, direction));
        }
        if continuing == Some(neighbor) {
            break;
        }
    }

    if walls.len() < 2 {
        return Vec::new();
    }
    walls.pop();

    walls
        .into_iter()
        .map(|(next, direction)| Seed {
            corner,
            next,
            direction,
        })
        .filter(|seed| !processed.contains(seed))
        .collect()
}
