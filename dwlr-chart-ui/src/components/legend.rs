use dioxus::prelude::*;
use dwlr_core::status::WaterLevelStatus;

/// Status colour key overlaid on the map. Unknown is not listed.
#[component]
pub fn Legend() -> Element {
    let entries = WaterLevelStatus::LEGEND.map(|status| (status, status.style().dot));

    rsx! {
        div {
            style: "position: absolute; bottom: 16px; left: 16px; background: rgba(255, 255, 255, 0.7); backdrop-filter: blur(4px); padding: 12px; border-radius: 8px; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 14px; font-weight: 700; color: #374151;",
                "Water Level Status"
            }
            for (status, color) in entries {
                div {
                    key: "{status}",
                    style: "display: flex; align-items: center; margin-top: 4px;",
                    span {
                        style: "width: 12px; height: 12px; border-radius: 50%; margin-right: 8px; background: {color};",
                    }
                    span {
                        style: "font-size: 12px; color: #4b5563;",
                        "{status}"
                    }
                }
            }
        }
    }
}
