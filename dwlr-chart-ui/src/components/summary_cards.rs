//! Summary row: total stations and counts per status.

use super::StatCard;
use dioxus::prelude::*;
use dwlr_core::summary::Summary;

const PLACEHOLDER: &str = "...";

#[component]
pub fn SummaryCards(summary: Summary, loading: bool) -> Element {
    let show = |n: usize| {
        if loading {
            PLACEHOLDER.to_string()
        } else {
            n.to_string()
        }
    };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 16px;",
            StatCard { label: "Total Stations".to_string(), value: show(summary.count) }
            StatCard { label: "Normal".to_string(), value: show(summary.normal) }
            StatCard { label: "Warning".to_string(), value: show(summary.warning) }
            StatCard { label: "Critical".to_string(), value: show(summary.critical) }
        }
    }
}
