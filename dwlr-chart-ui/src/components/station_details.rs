//! Detail panel for the selected station.

use super::{CloseIcon, StatCard, WaterLevelChart};
use crate::state::AppState;
use dioxus::prelude::*;
use dwlr_core::station::Station;
use dwlr_utils::dates::display_date;
use log::warn;

/// `data:` URL holding the station's JSON record, or None if it can't be serialised.
fn export_href(station: &Station) -> Option<String> {
    match station.to_json_pretty() {
        Ok(json) => Some(format!(
            "data:application/json;charset=utf-8,{}",
            String::from(js_sys::encode_uri_component(&json))
        )),
        Err(e) => {
            warn!("Export unavailable: {:#}", e);
            None
        }
    }
}

/// Shows the selected station's attributes and trend chart; renders nothing
/// when no station is selected.
#[component]
pub fn StationDetails() -> Element {
    let mut state = use_context::<AppState>();
    let Some(station) = state.selected_station() else {
        return rsx! {};
    };

    let colors = station.status.style();
    let last_updated = display_date(&station.last_updated);
    let export = export_href(&station);
    let export_name = station.export_file_name();

    rsx! {
        div {
            style: "background: #fff; padding: 24px; border-radius: 8px; border: 1px solid #e5e7eb; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); height: 100%; box-sizing: border-box; overflow-y: auto;",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start;",
                div {
                    h2 {
                        style: "margin: 0; font-size: 20px; font-weight: 700; color: #1f2937;",
                        "{station.name}"
                    }
                    p {
                        style: "margin: 0; font-size: 14px; color: #6b7280;",
                        "{station.state}"
                    }
                }
                button {
                    title: "Close",
                    style: "border: none; background: none; cursor: pointer; color: #9ca3af; padding: 0;",
                    onclick: move |_| state.clear_selection(),
                    CloseIcon {}
                }
            }

            div {
                style: "display: inline-flex; align-items: center; margin-top: 16px; padding: 4px 12px; border-radius: 9999px; font-size: 14px; font-weight: 500; background: {colors.bg}; color: {colors.text};",
                span {
                    style: "width: 8px; height: 8px; border-radius: 50%; margin-right: 8px; background: {colors.dot};",
                }
                "{station.status}"
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 24px;",
                StatCard {
                    label: "Current Level".to_string(),
                    value: station.current_water_level.to_string(),
                    unit: "m".to_string(),
                }
                StatCard {
                    label: "Recharge Rate".to_string(),
                    value: station.recharge_rate.to_string(),
                    unit: "mm/yr".to_string(),
                }
                StatCard {
                    label: "Aquifer Type".to_string(),
                    value: station.aquifer_type.clone(),
                }
                StatCard {
                    label: "Last Updated".to_string(),
                    value: last_updated,
                }
            }

            div {
                style: "margin-top: 24px;",
                h3 {
                    style: "margin: 0; font-weight: 600; color: #374151;",
                    "Historical Water Levels (24 Months)"
                }
                WaterLevelChart { readings: station.historical_data.clone() }
            }

            if let Some(href) = export {
                a {
                    href: "{href}",
                    download: "{export_name}",
                    style: "display: inline-block; margin-top: 16px; font-size: 14px; color: #2563eb;",
                    "Download JSON"
                }
            }
        }
    }
}
