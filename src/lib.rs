//! Room and chair inventory from ASCII floor plans.
//!
//! A plan is a character grid with walls drawn as `+ - | / \`, room names
//! as `(name)` and chairs as single letters (`W`, `P`, `S`, `C`). Each
//! closed wall loop becomes a [`Room`]; [`Apartment::build`] traces them
//! all, attaches names and chairs, and orders the result by name.

pub mod apartment;
pub mod error;
pub mod furniture;
pub mod grid;
pub mod report;
pub mod room;
pub mod trace;

pub use apartment::{Apartment, RoomKey};
pub use error::{FloorplanError, GridError, Result, TraceError};
pub use furniture::{Chair, FurnitureCounts};
pub use grid::{Coord, Grid, GridOptions};
pub use room::{Perimeter, Room, RoomId};
