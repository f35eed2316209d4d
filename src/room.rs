use std::collections::HashSet;

use crate::furniture::{Chair, FurnitureCounts};
use crate::grid::Coord;

/// Closed walk around a room: the first coordinate is repeated at the end.
#[derive(Debug, Clone)]
pub struct Perimeter {
    coords: Vec<Coord>,
    members: HashSet<Coord>,
}

impl Perimeter {
    /// Wraps an already-closed walk.
    #[must_use]
    pub fn new(coords: Vec<Coord>) -> Self {
        let members = coords.iter().copied().collect();
        Self { coords, members }
    }

    /// The walk in visiting order.
    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        self.members.contains(&at)
    }

    /// Returns `true` if every coordinate in `coords` lies on the walk.
    /// An empty slice is trivially contained.
    #[must_use]
    pub fn contains_all(&self, coords: &[Coord]) -> bool {
        coords.iter().all(|&at| self.contains(at))
    }
}

/// Identity of a named room, fixed by the cell its name label opens at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(u64);

impl RoomId {
    /// Derives the id of a room whose name label opens at `origin`.
    #[must_use]
    pub fn from_label_origin(origin: Coord) -> Self {
        #[allow(clippy::cast_sign_loss)]
        let (row, col) = (u64::from(origin.row as u32), u64::from(origin.col as u32));
        Self((row << 32) | col)
    }
}

/// A traced room with its label and furniture.
#[derive(Debug, Clone)]
pub struct Room {
    perimeter: Perimeter,
    name: Option<String>,
    id: Option<RoomId>,
    furniture: FurnitureCounts,
}

impl Room {
    /// Creates an unnamed, empty room.
    #[must_use]
    pub fn new(perimeter: Perimeter) -> Self {
        Self {
            perimeter,
            name: None,
            id: None,
            furniture: FurnitureCounts::new(),
        }
    }

    #[must_use]
    pub fn perimeter(&self) -> &Perimeter {
        &self.perimeter
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn id(&self) -> Option<RoomId> {
        self.id
    }

    #[must_use]
    pub fn furniture(&self) -> &FurnitureCounts {
        &self.furniture
    }

    /// Attaches a name label that opens at `origin`.
    pub fn set_label(&mut self, name: impl Into<String>, origin: Coord) {
        self.name = Some(name.into());
        self.id = Some(RoomId::from_label_origin(origin));
    }

    pub fn add_chair(&mut self, chair: Chair) {
        self.furniture.add(chair);
    }

    /// Returns `true` if every coordinate in `coords` lies on this room's
    /// boundary.
    #[must_use]
    pub fn encloses(&self, coords: &[Coord]) -> bool {
        self.perimeter.contains_all(coords)
    }
}
