use super::ErrorDisplay;
use crate::chart::{render_water_level_svg, CHART_HEIGHT, CHART_WIDTH};
use dioxus::prelude::*;
use dwlr_core::station::HistoricalReading;

#[derive(Props, Clone, PartialEq)]
pub struct WaterLevelChartProps {
    /// Monthly readings, oldest first
    pub readings: Vec<HistoricalReading>,
}

/// Line chart of a station's historical water levels, depth increasing downward.
#[component]
pub fn WaterLevelChart(props: WaterLevelChartProps) -> Element {
    match render_water_level_svg(&props.readings, (CHART_WIDTH, CHART_HEIGHT)) {
        Ok(svg) => rsx! {
            div {
                style: "width: 100%; margin-top: 16px; overflow-x: auto;",
                dangerous_inner_html: "{svg}",
            }
        },
        Err(e) => {
            log::warn!("Failed to render water level chart: {:#}", e);
            rsx! {
                ErrorDisplay { message: format!("Chart unavailable: {}", e) }
            }
        }
    }
}
