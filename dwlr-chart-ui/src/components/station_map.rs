//! Simplified map with one marker per station.
//!
//! Markers are placed with [`MapBounds::project`]; stations outside the
//! bounds are drawn where they project, even off the visible map.
//!
//! [`MapBounds::project`]: dwlr_core::projection::MapBounds::project

use crate::state::AppState;
use dioxus::prelude::*;
use dwlr_core::station::StationId;

const MAP_BACKGROUND_URL: &str = "https://picsum.photos/1200/800?grayscale&blur=1";

const MARKER_CSS: &str = "
.station-marker { transition: transform 0.3s ease-in-out; }
.station-marker:hover { transform: translate(-50%, -50%) scale(1.5); z-index: 10; }
";

/// What a marker needs to draw itself, computed once per render of the map.
struct MarkerView {
    id: StationId,
    name: String,
    position: String,
    color: &'static str,
}

#[component]
pub fn StationMap() -> Element {
    let state = use_context::<AppState>();
    let bounds = state.config.read().bounds;
    let selection = (state.selection)();

    let markers: Vec<MarkerView> = state
        .stations
        .read()
        .iter()
        .map(|station| MarkerView {
            id: station.id,
            name: station.name.clone(),
            position: bounds.project(station.lat, station.lng).css(),
            color: station.status.style().dot,
        })
        .collect();

    rsx! {
        style { "{MARKER_CSS}" }
        div {
            style: "position: relative; width: 100%; height: 100%; min-height: 400px; background: #dbeafe; border-radius: 8px; overflow: hidden; border: 1px solid #bfdbfe; box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.06);",
            div {
                style: "position: absolute; inset: 0; background-image: url('{MAP_BACKGROUND_URL}'); background-size: cover; background-position: center;",
            }
            div {
                style: "position: absolute; inset: 0; background: #dbeafe; opacity: 0.8;",
            }
            for marker in markers {
                StationMarker {
                    key: "{marker.id}",
                    id: marker.id,
                    name: marker.name,
                    position: marker.position,
                    color: marker.color.to_string(),
                    selected: selection.is_selected(marker.id),
                }
            }
        }
    }
}

#[component]
fn StationMarker(
    id: StationId,
    name: String,
    position: String,
    color: String,
    selected: bool,
) -> Element {
    let mut state = use_context::<AppState>();
    let ring = if selected {
        "box-shadow: 0 0 0 2px #fff, 0 0 0 4px #3b82f6;"
    } else {
        ""
    };

    rsx! {
        button {
            class: "station-marker",
            title: "{name}",
            style: "position: absolute; {position} width: 12px; height: 12px; padding: 0; border: none; border-radius: 50%; background: transparent; cursor: pointer; transform: translate(-50%, -50%); {ring}",
            onclick: move |_| state.select_station(id),
            span {
                style: "display: block; width: 100%; height: 100%; border-radius: 50%; background: {color};",
            }
        }
    }
}
