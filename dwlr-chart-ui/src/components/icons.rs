//! Inline SVG icons.

use dioxus::prelude::*;

const MAP_PIN_PATH: &str = "M11.54 22.351l.07.04.028.016a.76.76 0 00.723 0l.028-.015.071-.041a16.975 16.975 0 005.16-4.053l.003-.004c2.242-3.414 3.44-6.42 3.44-9.586A9.75 9.75 0 0012 2.25 9.75 9.75 0 002.25 12c0 3.166 1.198 6.172 3.44 9.586l.003.004a16.975 16.975 0 005.159 4.053zM12 14.25a2.25 2.25 0 100-4.5 2.25 2.25 0 000 4.5z";
const CLOSE_PATH: &str = "M6 18L18 6M6 6l12 12";

#[component]
pub fn MapPinIcon(
    #[props(default = 24)] size: u32,
    #[props(default = "currentColor".to_string())] color: String,
) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "{color}",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: MAP_PIN_PATH,
            }
        }
    }
}

#[component]
pub fn CloseIcon(
    #[props(default = 24)] size: u32,
    #[props(default = "currentColor".to_string())] color: String,
) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{color}",
            stroke_width: "1.5",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: CLOSE_PATH,
            }
        }
    }
}
