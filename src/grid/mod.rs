mod coord;
mod glyph;

pub use coord::Coord;
pub use glyph::Glyph;

use crate::error::GridError;

/// Options for turning plan text into a [`Grid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GridOptions {
    /// Right-pad short rows with blanks instead of rejecting the grid.
    pub pad_rows: bool,
}

/// Immutable rectangular character grid of a floor plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    /// Cells of name labels set into a horizontal wall run.
    inset: Vec<bool>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Parses plan text, one grid row per line.
    ///
    /// A trailing `\r` on each line and a single trailing empty line are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Empty` if there are no rows or no columns, and
    /// `GridError::InconsistentRows` if rows differ in length and
    /// `options.pad_rows` is not set.
    pub fn parse(text: &str, options: GridOptions) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = text.split('\n').collect();
        if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut rows: Vec<Vec<char>> = lines
            .into_iter()
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();

        if options.pad_rows {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            for row in &mut rows {
                row.resize(width, ' ');
            }
        }

        Self::from_rows(rows)
    }

    /// Builds a grid from pre-split rows.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Empty` or `GridError::InconsistentRows` as
    /// [`Grid::parse`] does.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, chars) in rows.into_iter().enumerate() {
            if chars.len() != width {
                return Err(GridError::InconsistentRows {
                    row,
                    expected: width,
                    found: chars.len(),
                });
            }
            cells.extend(chars);
        }

        let inset = inset_labels(&cells, width);
        Ok(Self {
            cells,
            inset,
            height,
            width,
        })
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if `at` lies inside the grid.
    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        self.index(at).is_some()
    }

    /// Character at `at`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<char> {
        self.index(at).map(|i| self.cells[i])
    }

    /// Glyph at `at`, or `None` outside the grid.
    #[must_use]
    pub fn glyph(&self, at: Coord) -> Option<Glyph> {
        self.get(at).map(Glyph::of)
    }

    /// Glyph at `at` as a boundary walk reads it. A `(name)` label set into
    /// a horizontal wall run reads as [`Glyph::Horizontal`] on every cell.
    #[must_use]
    pub fn wall_glyph(&self, at: Coord) -> Option<Glyph> {
        let i = self.index(at)?;
        if self.inset[i] {
            Some(Glyph::Horizontal)
        } else {
            Some(Glyph::of(self.cells[i]))
        }
    }

    /// Returns `true` if `at` is inside the grid and holds a wall or corner,
    /// including the cells of a label set into a wall.
    #[must_use]
    pub fn is_wall(&self, at: Coord) -> bool {
        self.wall_glyph(at).is_some_and(Glyph::is_wall)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).map(move |col| Coord::new(to_i32(row), to_i32(col)))
        })
    }

    /// First corner in row-major order.
    #[must_use]
    pub fn first_corner(&self) -> Option<Coord> {
        self.coords().find(|&at| self.glyph(at) == Some(Glyph::Corner))
    }

    fn index(&self, at: Coord) -> Option<usize> {
        let row = usize::try_from(at.row).ok()?;
        let col = usize::try_from(at.col).ok()?;
        (row < self.height && col < self.width).then_some(row * self.width + col)
    }
}

/// Marks every `(`..`)` run whose outer neighbors on the row are `-` or `+`.
fn inset_labels(cells: &[char], width: usize) -> Vec<bool> {
    let joins_wall = |c: char| matches!(c, '-' | '+');
    let mut inset = vec![false; cells.len()];
    for (r, row) in cells.chunks(width).enumerate() {
        let mut col = 1;
        while col < width {
            let close = (row[col] == '(' && joins_wall(row[col - 1]))
                .then(|| row[col + 1..].iter().position(|&c| c == ')'))
                .flatten()
                .map(|offset| col + 1 + offset);
            match close {
                Some(close) if row.get(close + 1).copied().is_some_and(joins_wall) => {
                    inset[r * width + col..=r * width + close].fill(true);
                    col = close + 1;
                }
                _ => col += 1,
            }
        }
    }
    inset
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn to_i32(v: usize) -> i32 {
    v as i32
}
