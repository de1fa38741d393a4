//! India Groundwater Watch
//!
//! Single-page dashboard for Digital Water Level Recorder (DWLR) stations.
//! Stations are drawn on a simplified map of India coloured by water level
//! status; clicking one opens a detail panel with its 24-month trend.
//!
//! Data flow:
//! 1. On mount, `fetch_stations()` generates the session's synthetic stations
//!    and returns them after a simulated network delay.
//! 2. The summary row is memoized on the station list.
//! 3. Marker clicks and the panel's close button drive the selection.

use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, info, warn, Level};
use dwlr_chart_ui::components::{
    Header, Legend, LoadingSpinner, StationDetails, StationMap, SummaryCards,
};
use dwlr_chart_ui::state::AppState;
use dwlr_core::summary::Summary;
use dwlr_data::{fetch_stations, DashboardConfig};

/// Two columns on wide screens; on narrow screens the detail panel slides
/// over the map from the right.
const LAYOUT_CSS: &str = "
.dashboard-grid { flex: 1; display: grid; grid-template-columns: 2fr 1fr; gap: 24px; overflow: hidden; }
.map-area { position: relative; height: 100%; min-height: 400px; }
.detail-panel { transition: transform 0.5s ease-in-out; }
@media (max-width: 1023px) {
  .dashboard-grid { grid-template-columns: 1fr; }
  .detail-panel { position: fixed; top: 0; bottom: 0; right: 0; width: 100%; max-width: 28rem; z-index: 30; transform: translateX(100%); }
  .detail-panel.open { transform: translateX(0); }
}
";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting India Groundwater Watch");
    launch(App);
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> DashboardConfig {
    DashboardConfig::from_location()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> DashboardConfig {
    DashboardConfig::default()
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(load_config()));

    // Load stations once on mount
    use_effect(move || {
        let config = state.config.peek().clone();
        spawn(async move {
            info!("Loading stations...");
            let stations = fetch_stations(&config).await;
            state.finish_loading(stations);
        });
    });

    let summary = use_memo(move || Summary::from_stations(&state.stations.read()));

    use_effect(move || {
        match summary().to_json() {
            Ok(json) => debug!("Summary: {}", json),
            Err(e) => warn!("Summary not logged: {:#}", e),
        }
    });

    let loading = (state.loading)();
    let panel_class = if state.selection.read().selected_id().is_some() {
        "detail-panel open"
    } else {
        "detail-panel"
    };

    rsx! {
        style { "{LAYOUT_CSS}" }
        div {
            style: "height: 100vh; width: 100vw; display: flex; flex-direction: column; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #111827;",
            Header {}
            main {
                style: "flex: 1; display: flex; flex-direction: column; gap: 24px; padding: 24px; overflow: hidden;",
                SummaryCards { summary: summary(), loading: loading }
                div {
                    class: "dashboard-grid",
                    div {
                        class: "map-area",
                        if loading {
                            LoadingSpinner { message: "Loading Map Data...".to_string() }
                        } else {
                            StationMap {}
                            Legend {}
                        }
                    }
                    div {
                        class: "{panel_class}",
                        StationDetails {}
                    }
                }
            }
        }
    }
}
