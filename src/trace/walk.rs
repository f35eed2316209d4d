use crate::error::TraceError;
use crate::grid::{Coord, Glyph, Grid};

/// Travel direction along a wall segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Anti-clockwise ring of "back" offsets around a corner, each paired with
/// the direction to take when leaving towards `corner - offset`.
///
/// The scan starts one slot past the offset we arrived along, so the first
/// wall found is the tightest anti-clockwise turn.
const CORNER_RING: [(Coord, Direction); 8] = [
    (Coord::new(1, 1), Direction::Up),
    (Coord::new(0, 1), Direction::Left),
    (Coord::new(-1, 1), Direction::Down),
    (Coord::new(-1, 0), Direction::Down),
    (Coord::new(-1, -1), Direction::Down),
    (Coord::new(0, -1), Direction::Right),
    (Coord::new(1, -1), Direction::Up),
    (Coord::new(1, 0), Direction::Up),
];

/// Step taken along a straight or diagonal segment, if `direction` makes
/// sense for it.
fn segment_step(glyph: Glyph, direction: Direction) -> Option<Coord> {
    use Direction::{Down, Left, Right, Up};

    let step = match (glyph, direction) {
        (Glyph::Horizontal, Right) => Coord::new(0, 1),
        (Glyph::Horizontal, Left) => Coord::new(0, -1),
        (Glyph::Vertical, Up) => Coord::new(-1, 0),
        (Glyph::Vertical, Down) => Coord::new(1, 0),
        (Glyph::Slash, Up) => Coord::new(-1, 1),
        (Glyph::Slash, Down) => Coord::new(1, -1),
        (Glyph::Backslash, Up) => Coord::new(-1, -1),
        (Glyph::Backslash, Down) => Coord::new(1, 1),
        _ => return None,
    };
    Some(step)
}

/// Computes the next boundary cell after `current`.
///
/// Segments carry the walk on in `direction`, and a name label set into a
/// wall is crossed like a run of `-`. At a corner the ring of
/// neighbors is scanned anti-clockwise starting just past the cell we came
/// from (`previous`), and the first wall neighbor wins along with its
/// direction.
///
/// # Errors
///
/// Returns `TraceError::MalformedBoundary` if `current` is not a wall, if a
/// segment cannot be followed in `direction`, if the step leaves the grid,
/// or if a corner has no other wall neighbor.
pub fn advance(
    grid: &Grid,
    current: Coord,
    previous: Coord,
    direction: Direction,
) -> Result<(Coord, Direction), TraceError> {
    let (Some(c), Some(glyph)) = (grid.get(current), grid.wall_glyph(current)) else {
        return Err(TraceError::MalformedBoundary {
            at: current,
            glyph: ' ',
            reason: "walk left the grid",
        });
    };
    let malformed = |reason| TraceError::MalformedBoundary {
        at: current,
        glyph: c,
        reason,
    };

    if glyph == Glyph::Corner {
        return turn_at_corner(grid, current, previous);
    }
    if !glyph.is_segment() {
        return Err(malformed("walk reached a cell that is not a wall"));
    }

    let step = segment_step(glyph, direction)
        .ok_or_else(|| malformed("wall cannot be followed in the current direction"))?;
    let next = current + step;
    if !grid.contains(next) {
        return Err(malformed("wall runs off the edge of the grid"));
    }
    Ok((next, direction))
}

fn turn_at_corner(
    grid: &Grid,
    current: Coord,
    previous: Coord,
) -> Result<(Coord, Direction), TraceError> {
    let malformed = |reason| TraceError::MalformedBoundary {
        at: current,
        glyph: '+',
        reason,
    };

    let back = current - previous;
    let start = CORNER_RING
        .iter()
        .position(|&(offset, _)| offset == back)
        .ok_or_else(|| malformed("corner was not entered from a neighboring cell"))?;

    (1..CORNER_RING.len())
        .map(|k| CORNER_RING[(start + k) % CORNER_RING.len()])
        .map(|(offset, direction)| (current - offset, direction))
        .find(|&(next, _)| grid.is_wall(next))
        .ok_or_else(|| malformed("corner has no wall neighbor to continue along"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::grid::GridOptions;

    fn grid(text: &str) -> Grid {
        Grid::parse(text, GridOptions::default()).unwrap()
    }

    #[test]
    fn segments_keep_direction() {
        let g = grid("-|/\\\n----\n----");
        assert_eq!(
            advance(&g, Coord::new(1, 1), Coord::new(1, 0), Direction::Right).unwrap(),
            (Coord::new(1, 2), Direction::Right)
        );
        assert_eq!(
            advance(&g, Coord::new(1, 1), Coord::new(1, 2), Direction::Left).unwrap(),
            (Coord::new(1, 0), Direction::Left)
        );
        assert_eq!(
            advance(&g, Coord::new(0, 1), Coord::new(1, 1), Direction::Down).unwrap(),
            (Coord::new(1, 1), Direction::Down)
        );
        assert_eq!(
            advance(&g, Coord::new(0, 2), Coord::new(1, 1), Direction::Down).unwrap(),
            (Coord::new(1, 1), Direction::Down)
        );
    }

    #[test]
    fn slash_moves_diagonally() {
        // `/` goes up-right or down-left, `\` goes up-left or down-right.
        let g = grid("   \n / \n   ");
        let at = Coord::new(1, 1);
        assert_eq!(
            advance(&g, at, Coord::new(2, 0), Direction::Up).unwrap(),
            (Coord::new(0, 2), Direction::Up)
        );
        assert_eq!(
            advance(&g, at, Coord::new(0, 2), Direction::Down).unwrap(),
            (Coord::new(2, 0), Direction::Down)
        );

        let g = grid("   \n \\ \n   ");
        assert_eq!(
            advance(&g, at, Coord::new(2, 2), Direction::Up).unwrap(),
            (Coord::new(0, 0), Direction::Up)
        );
        assert_eq!(
            advance(&g, at, Coord::new(0, 0), Direction::Down).unwrap(),
            (Coord::new(2, 2), Direction::Down)
        );
    }

    #[test]
    fn corner_turns_tightest_anti_clockwise() {
        let g = grid("+---+\n|   |\n+---+");
        // Top-right corner reached moving right: turn down.
        assert_eq!(
            advance(&g, Coord::new(0, 4), Coord::new(0, 3), Direction::Right).unwrap(),
            (Coord::new(1, 4), Direction::Down)
        );
        // Bottom-right corner reached moving down: turn left.
        assert_eq!(
            advance(&g, Coord::new(2, 4), Coord::new(1, 4), Direction::Down).unwrap(),
            (Coord::new(2, 3), Direction::Left)
        );
        // Bottom-left corner reached moving left: turn up.
        assert_eq!(
            advance(&g, Coord::new(2, 0), Coord::new(2, 1), Direction::Left).unwrap(),
            (Coord::new(1, 0), Direction::Up)
        );
        // Top-left corner reached moving up: turn right.
        assert_eq!(
            advance(&g, Coord::new(0, 0), Coord::new(1, 0), Direction::Up).unwrap(),
            (Coord::new(0, 1), Direction::Right)
        );
    }

    #[test]
    fn corner_prefers_inner_wall_at_junction() {
        // Walking right along the top wall into a T junction turns down the
        // shared wall rather than continuing right.
        let g = grid("+---+---+\n|   |   |\n+---+---+");
        assert_eq!(
            advance(&g, Coord::new(0, 4), Coord::new(0, 3), Direction::Right).unwrap(),
            (Coord::new(1, 4), Direction::Down)
        );
    }

    #[test]
    fn corner_onto_diagonal() {
        let g = grid("+---+  \n|    \\ \n+-----+");
        assert_eq!(
            advance(&g, Coord::new(0, 4), Coord::new(0, 3), Direction::Right).unwrap(),
            (Coord::new(1, 5), Direction::Down)
        );
        assert_eq!(
            advance(&g, Coord::new(1, 5), Coord::new(0, 4), Direction::Down).unwrap(),
            (Coord::new(2, 6), Direction::Down)
        );
        assert_eq!(
            advance(&g, Coord::new(2, 6), Coord::new(1, 5), Direction::Down).unwrap(),
            (Coord::new(2, 5), Direction::Left)
        );
    }

    #[test]
    fn label_in_top_wall_is_crossed_like_a_wall() {
        let g = grid("+-(A)-+\n|     |\n+-----+");
        let mut at = Coord::new(0, 1);
        let mut previous = Coord::new(0, 0);
        for col in 2..=6 {
            let (next, direction) = advance(&g, at, previous, Direction::Right).unwrap();
            assert_eq!((next, direction), (Coord::new(0, col), Direction::Right));
            previous = at;
            at = next;
        }
        assert_eq!(
            advance(&g, Coord::new(0, 2), Coord::new(0, 3), Direction::Left).unwrap(),
            (Coord::new(0, 1), Direction::Left)
        );
    }

    #[test]
    fn corner_turns_onto_label_in_wall() {
        let g = grid("+---+\n|   |\n+(a)+");
        // Bottom-right corner reached moving down: the label is the wall.
        assert_eq!(
            advance(&g, Coord::new(2, 4), Coord::new(1, 4), Direction::Down).unwrap(),
            (Coord::new(2, 3), Direction::Left)
        );
    }

    #[test]
    fn label_on_the_floor_is_malformed() {
        let g = grid("+-(A) ");
        let err = advance(&g, Coord::new(0, 2), Coord::new(0, 1), Direction::Right).unwrap_err();
        assert!(matches!(
            err,
            TraceError::MalformedBoundary { at, glyph: '(', .. } if at == Coord::new(0, 2)
        ));
    }

    #[test]
    fn dead_end_corner_is_malformed() {
        let g = grid("+--+\n|   ");
        let err = advance(&g, Coord::new(0, 3), Coord::new(0, 2), Direction::Right).unwrap_err();
        assert!(matches!(
            err,
            TraceError::MalformedBoundary { at, glyph: '+', .. } if at == Coord::new(0, 3)
        ));
    }

    #[test]
    fn floor_cell_is_malformed() {
        let g = grid("+--\n|  ");
        let err = advance(&g, Coord::new(1, 1), Coord::new(1, 0), Direction::Right).unwrap_err();
        assert!(matches!(
            err,
            TraceError::MalformedBoundary { at, glyph: ' ', .. } if at == Coord::new(1, 1)
        ));
    }

    #[test]
    fn segment_against_its_grain_is_malformed() {
        let g = grid("---");
        let err = advance(&g, Coord::new(0, 1), Coord::new(0, 0), Direction::Down).unwrap_err();
        assert!(matches!(err, TraceError::MalformedBoundary { glyph: '-', .. }));
    }

    #[test]
    fn segment_off_the_edge_is_malformed() {
        let g = grid("--");
        let err = advance(&g, Coord::new(0, 1), Coord::new(0, 0), Direction::Right).unwrap_err();
        assert!(matches!(
            err,
            TraceError::MalformedBoundary { at, .. } if at == Coord::new(0, 1)
        ));
    }
}
