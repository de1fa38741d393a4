use super::MapPinIcon;
use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            style: "background: #fff; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1); z-index: 20;",
            div {
                style: "max-width: 80rem; margin: 0 auto; padding: 16px 32px; display: flex; align-items: center; gap: 12px;",
                MapPinIcon { size: 32, color: "#2563eb".to_string() }
                div {
                    h1 {
                        style: "margin: 0; font-size: 24px; font-weight: 700; color: #1f2937;",
                        "India Groundwater Watch"
                    }
                    p {
                        style: "margin: 0; font-size: 14px; color: #6b7280;",
                        "Real-time DWLR Monitoring Dashboard"
                    }
                }
            }
        }
    }
}
