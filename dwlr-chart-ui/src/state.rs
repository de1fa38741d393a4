//! Dashboard state shared through Dioxus context.
//!
//! The root component provides one `AppState` with `use_context_provider`;
//! the map, markers and detail panel read it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use dwlr_core::selection::Selection;
use dwlr_core::station::{Station, StationId};
use dwlr_data::DashboardConfig;
use log::info;

/// Shared state for the groundwater dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Settings the session was started with
    pub config: Signal<DashboardConfig>,
    /// Stations for this session; replaced wholesale, never edited in place
    pub stations: Signal<Vec<Station>>,
    /// True until the initial load completes
    pub loading: Signal<bool>,
    /// Station shown in the detail panel
    pub selection: Signal<Selection>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Signal::new(config),
            stations: Signal::new(Vec::new()),
            loading: Signal::new(true),
            selection: Signal::new(Selection::default()),
        }
    }

    /// Store the loaded stations and leave the loading state.
    pub fn finish_loading(&mut self, stations: Vec<Station>) {
        info!("Loaded {} stations", stations.len());
        self.stations.set(stations);
        self.loading.set(false);
    }

    pub fn select_station(&mut self, id: StationId) {
        info!("Selected station {}", id);
        self.selection.write().select(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.write().clear();
    }

    /// The currently selected station, if any.
    pub fn selected_station(&self) -> Option<Station> {
        let stations = self.stations.read();
        self.selection.read().resolve(&stations).cloned()
    }
}
