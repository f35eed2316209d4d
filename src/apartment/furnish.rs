use tracing::{trace, warn};

use crate::furniture::Chair;
use crate::grid::{Coord, Glyph, Grid};

use super::Apartment;

impl Apartment {
    /// Attaches chairs and name labels to traced rooms.
    ///
    /// Each chair or label is matched to every room whose boundary holds
    /// the nearest walls to its left and right on the same row, both
    /// scanned from the chair or from the label's `(`. Chairs are added to
    /// the apartment totals whether or not a room matched. Letters of a
    /// label set into a wall are wall cells, not chairs. A label sets both
    /// name and id of its rooms; a later label overwrites an earlier one.
    pub fn furnish(&mut self, grid: &Grid) {
        for at in grid.coords() {
            match grid.glyph(at) {
                Some(Glyph::Chair(chair)) if !grid.is_wall(at) => {
                    self.place_chair(grid, at, chair);
                }
                Some(Glyph::NameOpen) => self.place_label(grid, at),
                _ => {}
            }
        }
    }

    fn place_chair(&mut self, grid: &Grid, at: Coord, chair: Chair) {
        let walls = flanking_walls(grid, at);
        for &key in &self.order {
            if let Some(room) = self.rooms.get_mut(key) {
                if room.encloses(&walls) {
                    room.add_chair(chair);
                }
            }
        }
        self.totals.add(chair);
    }

    fn place_label(&mut self, grid: &Grid, open: Coord) {
        let Some(name) = read_label(grid, open) else {
            warn!(at = %open, "name label is never closed, skipping");
            return;
        };

        let walls = flanking_walls(grid, open);
        for &key in &self.order {
            if let Some(room) = self.rooms.get_mut(key) {
                if room.encloses(&walls) {
                    trace!(at = %open, name = %name, "labelled room");
                    room.set_label(name.clone(), open);
                }
            }
        }
    }
}

/// Nearest walls left and right of `from` on its row. Either may be
/// missing at the grid edge.
fn flanking_walls(grid: &Grid, from: Coord) -> Vec<Coord> {
    let left = (0..from.col)
        .rev()
        .map(|col| Coord::new(from.row, col))
        .find(|&at| grid.is_wall(at));
    let right = (from.col + 1..)
        .map(|col| Coord::new(from.row, col))
        .take_while(|&at| grid.contains(at))
        .find(|&at| grid.is_wall(at));

    left.into_iter().chain(right).collect()
}

/// Reads the label text after `open` up to the next `)` on the same row.
fn read_label(grid: &Grid, open: Coord) -> Option<String> {
    let mut name = String::new();
    let mut at = open + Coord::new(0, 1);
    loop {
        match grid.get(at)? {
            ')' => return Some(name),
            c => name.push(c),
        }
        at = at + Coord::new(0, 1);
    }
}
