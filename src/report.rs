use std::iter;

use crate::apartment::Apartment;

/// Name printed for rooms that carry no label.
pub const UNNAMED: &str = "<unnamed>";

/// Renders the chair inventory: totals first, then one block per room in
/// the apartment's current order. No trailing newline.
#[must_use]
pub fn render(apartment: &Apartment) -> String {
    let rooms = apartment
        .rooms()
        .map(|room| format!("{}:\n{}", room.name().unwrap_or(UNNAMED), room.furniture()));
    iter::once(format!("total:\n{}", apartment.totals()))
        .chain(rooms)
        .collect::<Vec<_>>()
        .join("\n")
}
