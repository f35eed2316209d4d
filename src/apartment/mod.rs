mod furnish;

use std::collections::HashSet;

use slotmap::SlotMap;
use tracing::{debug, info};

use crate::error::Result;
use crate::furniture::FurnitureCounts;
use crate::grid::Grid;
use crate::room::Room;
use crate::trace::trace_rooms;

slotmap::new_key_type! {
    /// Handle to a room owned by an [`Apartment`].
    pub struct RoomKey;
}

/// All rooms of one floor plan together with building-wide chair totals.
///
/// Rooms live in an arena keyed by [`RoomKey`]; a separate key list keeps
/// the current room order (trace order until [`Apartment::sort`]).
#[derive(Debug, Default)]
pub struct Apartment {
    size: (usize, usize),
    rooms: SlotMap<RoomKey, Room>,
    order: Vec<RoomKey>,
    totals: FurnitureCounts,
}

impl Apartment {
    /// Creates an apartment of `(height, width)` cells without rooms.
    #[must_use]
    pub fn new(size: (usize, usize)) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Traces every room of `grid`. Rooms are unnamed and unfurnished.
    ///
    /// # Errors
    ///
    /// Returns `TraceError::MalformedBoundary` if a room boundary cannot be
    /// walked to completion. No partially traced apartment is returned.
    pub fn from_grid(grid: &Grid) -> Result<Self> {
        let mut apartment = Self::new((grid.height(), grid.width()));
        for perimeter in trace_rooms(grid)? {
            apartment.add_room(Room::new(perimeter));
        }
        debug!(rooms = apartment.len(), "apartment traced");
        Ok(apartment)
    }

    /// Runs the full pipeline: trace, furnish, drop duplicates, sort.
    ///
    /// # Errors
    ///
    /// See [`Apartment::from_grid`].
    pub fn build(grid: &Grid) -> Result<Self> {
        let mut apartment = Self::from_grid(grid)?;
        apartment.furnish(grid);
        apartment.clean();
        apartment.sort();
        info!(
            rooms = apartment.len(),
            chairs = apartment.totals.total(),
            "apartment built"
        );
        Ok(apartment)
    }

    /// Appends a room at the end of the current order.
    pub fn add_room(&mut self, room: Room) -> RoomKey {
        let key = self.rooms.insert(room);
        self.order.push(key);
        key
    }

    /// Removes rooms whose id was already seen earlier in the order.
    ///
    /// Rooms without an id are never considered duplicates.
    pub fn clean(&mut self) {
        let mut seen = HashSet::new();
        let mut dropped = Vec::new();
        let rooms = &self.rooms;
        self.order.retain(|&key| {
            let keep = rooms
                .get(key)
                .and_then(Room::id)
                .map_or(true, |id| seen.insert(id));
            if !keep {
                dropped.push(key);
            }
            keep
        });

        for key in dropped {
            self.rooms.remove(key);
        }
    }

    /// Orders rooms by name. Unnamed rooms come first; ties keep their
    /// current relative order.
    pub fn sort(&mut self) {
        let rooms = &self.rooms;
        self.order
            .sort_by_key(|&key| rooms.get(key).and_then(Room::name));
    }

    /// `(height, width)` of the plan.
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    /// Chair counts over the whole plan, matched to a room or not.
    #[must_use]
    pub fn totals(&self) -> &FurnitureCounts {
        &self.totals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Room keys in current order.
    #[must_use]
    pub fn keys(&self) -> &[RoomKey] {
        &self.order
    }

    #[must_use]
    pub fn room(&self, key: RoomKey) -> Option<&Room> {
        self.rooms.get(key)
    }

    /// Rooms in current order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.order.iter().filter_map(|&key| self.rooms.get(key))
    }

    /// First room, in current order, carrying `name`.
    #[must_use]
    pub fn room_named(&self, name: &str) -> Option<&Room> {
        self.rooms().find(|room| room.name() == Some(name))
    }
}
