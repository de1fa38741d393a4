//! Which station the detail panel is showing.

use crate::station::{find_station, Station, StationId};
use log::debug;

/// Selection state: nothing selected, or one station by id.
///
/// Selecting always replaces the current selection; selecting the already
/// selected station keeps it selected. Only [`Selection::clear`] returns to
/// `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(StationId),
}

impl Selection {
    pub fn select(&mut self, id: StationId) {
        debug!("selecting station {}", id);
        *self = Selection::Selected(id);
    }

    pub fn clear(&mut self) {
        debug!("clearing station selection");
        *self = Selection::None;
    }

    pub fn selected_id(&self) -> Option<StationId> {
        match self {
            Selection::Selected(id) => Some(*id),
            Selection::None => None,
        }
    }

    pub fn is_selected(&self, id: StationId) -> bool {
        self.selected_id() == Some(id)
    }

    /// The selected station, if it is present in `stations`.
    pub fn resolve<'a>(&self, stations: &'a [Station]) -> Option<&'a Station> {
        self.selected_id().and_then(|id| find_station(stations, id))
    }
}
